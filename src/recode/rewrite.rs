//! Rewrite rlabeled node names into rcoded ones.

use crate::recode::CodeLookup;
use crate::ssm::Ssm;

/// Delimiter that opens the first rlabel suffix in a node name.
const RLABEL_OPEN: &str = " [r";

/// For every node: drop everything from the first rlabel suffix onward, then
/// append `" {rcode <code>}"` for each of the node's rlabels (in order) that
/// resolves through the lookup. Unresolved rlabels contribute nothing.
/// Mutates the map in place. Maps without rlabels come through unchanged.
pub fn replace_rlabels_with_rcodes(ssm: &mut Ssm, lookup: &CodeLookup) {
    for node in &mut ssm.nodes {
        let delabeled = match node.name.find(RLABEL_OPEN) {
            Some(pos) => &node.name[..pos],
            None => node.name.as_str(),
        };
        let mut new_name = delabeled.to_string();
        for rlabel in &node.rlabels {
            if let Some(code) = lookup.code_for(rlabel) {
                new_name.push_str(" {rcode ");
                new_name.push_str(code);
                new_name.push('}');
            }
        }
        node.name = new_name;
    }
}
