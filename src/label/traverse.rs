//! Breadth-first zone traversal, directed and undirected.

use std::collections::VecDeque;

use crate::label::visit::Barriers;
use crate::ssm::{Edge, Node, Ssm};

/// Append the rlabel to a node's name and rlabels list.
fn stamp(node: &mut Node, rlabel: &str) {
    node.name = format!("{} {}", node.name, rlabel);
    node.rlabels.push(rlabel.to_string());
}

fn targets_of(links: &[Edge], id: i64) -> Vec<i64> {
    links.iter().filter(|l| l.source == id).map(|l| l.target).collect()
}

fn sources_of(links: &[Edge], id: i64) -> Vec<i64> {
    links.iter().filter(|l| l.target == id).map(|l| l.source).collect()
}

/// Directed zone traversal for Responsibility `r_id`: two independent BFS
/// passes, outgoing edges first, then incoming edges, each with freshly
/// installed barriers.
///
/// The forward pass stamps unconditionally — a node is popped at most once
/// per pass because it is marked visited the instant it is enqueued. The
/// backward pass checks `rlabels` before stamping, which keeps `r_id` itself
/// (visited by both passes) from being stamped twice.
///
/// Known incompleteness, preserved on purpose: the passes explore outgoing
/// and incoming edges in isolation, so a path A→B←C does not connect A to C
/// (neither pass crosses B against its own direction). Undirected traversal
/// exists to cover that case.
pub(crate) fn traverse_directed(ssm: &mut Ssm, r_id: i64, rlabel: &str, barriers: &Barriers) {
    // Forward: outgoing edges.
    let mut visited = barriers.install();
    let mut queue = VecDeque::new();
    queue.push_back(r_id);
    while let Some(id) = queue.pop_front() {
        if let Some(pos) = ssm.node_position(id) {
            stamp(&mut ssm.nodes[pos], rlabel);
        }
        for target in targets_of(&ssm.links, id) {
            // Dangling endpoints are skipped silently.
            if ssm.node_position(target).is_some() && visited.mark(target) {
                queue.push_back(target);
            }
        }
    }

    // Backward: incoming edges, fresh barriers.
    let mut visited = barriers.install();
    queue.push_back(r_id);
    while let Some(id) = queue.pop_front() {
        if let Some(pos) = ssm.node_position(id) {
            let node = &mut ssm.nodes[pos];
            if !node.rlabels.iter().any(|l| l == rlabel) {
                stamp(node, rlabel);
            }
        }
        for source in sources_of(&ssm.links, id) {
            if ssm.node_position(source).is_some() && visited.mark(source) {
                queue.push_back(source);
            }
        }
    }
}

/// Undirected zone traversal: one BFS over the symmetrized edge set. Every
/// reached node is stamped exactly once. Reaches a superset of the nodes the
/// two directed passes reach between them.
pub(crate) fn traverse_undirected(ssm: &mut Ssm, r_id: i64, rlabel: &str, barriers: &Barriers) {
    let mut undirected: Vec<(i64, i64)> = Vec::with_capacity(ssm.links.len() * 2);
    for l in &ssm.links {
        undirected.push((l.source, l.target));
        undirected.push((l.target, l.source));
    }

    let mut visited = barriers.install();
    let mut queue = VecDeque::new();
    queue.push_back(r_id);
    while let Some(id) = queue.pop_front() {
        if let Some(pos) = ssm.node_position(id) {
            stamp(&mut ssm.nodes[pos], rlabel);
        }
        for &(source, target) in &undirected {
            if source == id && ssm.node_position(target).is_some() && visited.mark(target) {
                queue.push_back(target);
            }
        }
    }
}
