//! Code lookup built from a sorted-responsibilities document.
//!
//! The document is produced by the external sort utility: a `sorted` array of
//! groups, each with a `title` (the code) and the Responsibility `textItems`
//! filed under it. Those texts are rlabeled, so an rlabel can be resolved to
//! a code by finding a stored text that contains it.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SsmError};

#[derive(Debug, Deserialize)]
struct SortedDoc {
    sorted: Vec<CodeGroup>,
}

#[derive(Debug, Deserialize)]
struct CodeGroup {
    title: String,
    #[serde(rename = "textItems")]
    text_items: Vec<TextItem>,
}

#[derive(Debug, Deserialize)]
struct TextItem {
    text: String,
}

/// Mapping from Responsibility text to its human-assigned code.
///
/// Entries keep the document's group/item order, and lookups scan in that
/// order, so resolution is deterministic.
#[derive(Debug, Clone, Default)]
pub struct CodeLookup {
    entries: Vec<(String, String)>,
}

impl CodeLookup {
    /// Parse a sorted-responsibilities document. An empty `sorted` array is
    /// valid and yields an empty lookup.
    pub fn parse(content: &str, path: &str) -> Result<CodeLookup> {
        let doc: SortedDoc =
            serde_json::from_str(content).map_err(|e| SsmError::from_json(path, e))?;
        let mut entries = Vec::new();
        for group in doc.sorted {
            log::debug!(
                "rcode {}: {} responsibility text(s)",
                group.title,
                group.text_items.len()
            );
            for item in group.text_items {
                entries.push((item.text, group.title.clone()));
            }
        }
        Ok(CodeLookup { entries })
    }

    /// Read and parse the document from disk.
    pub fn from_file(path: &Path) -> Result<CodeLookup> {
        let content = std::fs::read_to_string(path).map_err(SsmError::Io)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Resolve an rlabel to its code: the first stored text containing the
    /// rlabel as a substring wins. The texts come out of rlabeled maps with
    /// the rlabel embedded verbatim, which is what makes this lenient
    /// containment test work.
    pub fn code_for(&self, rlabel: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(text, _)| text.contains(rlabel))
            .map(|(_, code)| code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
