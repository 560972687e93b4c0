//! SSM graph model: serde document types and node-kind classification.
//!
//! A System Support Map is a JSON document with a `nodes` array and a `links`
//! array. Two discriminator conventions exist across corpus eras: newer maps
//! carry an explicit `type` field, older ones encode the kind in a `shape`
//! field. Classification happens once at load time and produces the canonical
//! [`NodeKind`] consumed by all downstream logic.

mod document;

pub use document::{read_ssm, write_ssm};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SsmError};

/// Canonical node kind, derived from the `type` or `shape` discriminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeKind {
    Role,
    Responsibility,
    Wish,
    Resource,
    #[default]
    Other,
}

/// A single SSM node. `name` and `rlabels` are the only fields the labeling
/// and recode passes mutate; everything else round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Append-only, no duplicates. Absent on unlabeled input.
    #[serde(default)]
    pub rlabels: Vec<String>,
    /// Computed at load time, never serialized.
    #[serde(skip)]
    pub kind: NodeKind,
    /// Any other node fields (position, color, ...) preserved on write.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    /// Derive the canonical kind from whichever discriminator the node
    /// carries. The `type` convention wins when both are present.
    fn classify(&self) -> Result<NodeKind> {
        if let Some(t) = &self.node_type {
            Ok(match t.as_str() {
                "role" => NodeKind::Role,
                "responsibility" => NodeKind::Responsibility,
                "wish" => NodeKind::Wish,
                "resource" => NodeKind::Resource,
                _ => NodeKind::Other,
            })
        } else if let Some(s) = &self.shape {
            Ok(match s.as_str() {
                "circle" => NodeKind::Role,
                "rectangle" => NodeKind::Responsibility,
                "diamond" => NodeKind::Wish,
                "ellipse" => NodeKind::Resource,
                _ => NodeKind::Other,
            })
        } else {
            Err(SsmError::Schema(format!(
                "node {} has neither \"type\" nor \"shape\" discriminator",
                self.id
            )))
        }
    }
}

/// A directed edge between two node ids. Duplicate edges are legal; traversal
/// only cares about existence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub source: i64,
    pub target: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One System Support Map document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ssm {
    pub nodes: Vec<Node>,
    pub links: Vec<Edge>,
    /// Other top-level fields preserved on write.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Ssm {
    /// Parse an SSM from JSON text and classify every node. `path` is used
    /// only for error messages.
    pub fn parse(content: &str, path: &str) -> Result<Ssm> {
        let mut ssm: Ssm =
            serde_json::from_str(content).map_err(|e| SsmError::from_json(path, e))?;
        for node in &mut ssm.nodes {
            node.kind = node.classify().map_err(|e| match e {
                SsmError::Schema(msg) => SsmError::Schema(format!("{}: {}", path, msg)),
                other => other,
            })?;
        }
        Ok(ssm)
    }

    /// Serialize back to JSON text.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SsmError::Parse(e.to_string()))
    }

    /// Ids of all Responsibility nodes, in stored order.
    pub fn responsibility_ids(&self) -> Vec<i64> {
        self.nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Responsibility)
            .map(|n| n.id)
            .collect()
    }

    /// Id of the single Role node, if present. First match wins when the map
    /// is malformed and carries more than one.
    pub fn role_id(&self) -> Option<i64> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Role).map(|n| n.id)
    }

    /// Index of a node by id, or None for a dangling edge endpoint.
    pub fn node_position(&self, id: i64) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Ssm {
        Ssm::parse(json, "test.json").unwrap()
    }

    #[test]
    fn test_classify_by_shape() {
        let ssm = parse(
            r#"{"nodes":[
                {"id":0,"name":"Mom","shape":"circle"},
                {"id":1,"name":"Cooks","shape":"rectangle"},
                {"id":2,"name":"More time","shape":"diamond"},
                {"id":3,"name":"Stove","shape":"ellipse"},
                {"id":4,"name":"Note","shape":"star"}
            ],"links":[]}"#,
        );
        let kinds: Vec<NodeKind> = ssm.nodes.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Role,
                NodeKind::Responsibility,
                NodeKind::Wish,
                NodeKind::Resource,
                NodeKind::Other
            ]
        );
    }

    #[test]
    fn test_classify_by_type() {
        let ssm = parse(
            r#"{"nodes":[
                {"id":0,"name":"Dad","type":"role"},
                {"id":1,"name":"Drives","type":"responsibility"},
                {"id":2,"name":"Car","type":"resource"},
                {"id":3,"name":"Rest","type":"wish"}
            ],"links":[]}"#,
        );
        assert_eq!(ssm.nodes[0].kind, NodeKind::Role);
        assert_eq!(ssm.nodes[1].kind, NodeKind::Responsibility);
        assert_eq!(ssm.nodes[2].kind, NodeKind::Resource);
        assert_eq!(ssm.nodes[3].kind, NodeKind::Wish);
    }

    #[test]
    fn test_type_wins_over_shape() {
        let ssm = parse(
            r#"{"nodes":[{"id":0,"name":"n","type":"role","shape":"rectangle"}],"links":[]}"#,
        );
        assert_eq!(ssm.nodes[0].kind, NodeKind::Role);
    }

    #[test]
    fn test_missing_discriminator_is_schema_error() {
        let err = Ssm::parse(r#"{"nodes":[{"id":7,"name":"n"}],"links":[]}"#, "map.json")
            .unwrap_err();
        assert!(matches!(err, SsmError::Schema(_)));
        assert!(err.to_string().contains("map.json"));
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Ssm::parse("{nodes: oops", "map.json").unwrap_err();
        assert!(matches!(err, SsmError::Parse(_)));
    }

    #[test]
    fn test_responsibility_ids_in_stored_order() {
        let ssm = parse(
            r#"{"nodes":[
                {"id":5,"name":"b","shape":"rectangle"},
                {"id":1,"name":"r","shape":"circle"},
                {"id":3,"name":"a","shape":"rectangle"}
            ],"links":[]}"#,
        );
        assert_eq!(ssm.responsibility_ids(), vec![5, 3]);
        assert_eq!(ssm.role_id(), Some(1));
    }

    #[test]
    fn test_round_trip_preserves_unknown_fields() {
        let ssm = parse(
            r#"{"title":"my map","nodes":[{"id":0,"name":"n","shape":"circle","x":12.5}],"links":[{"source":0,"target":0,"style":"dashed"}]}"#,
        );
        let out = ssm.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "my map");
        assert_eq!(value["nodes"][0]["x"], 12.5);
        assert_eq!(value["nodes"][0]["shape"], "circle");
        assert_eq!(value["links"][0]["style"], "dashed");
        // kind is transient, never serialized
        assert!(value["nodes"][0].get("kind").is_none());
    }
}
