//! Per-map labeling driver.

use crate::error::Result;
use crate::label::format::{format_rlabel, label_suffix, SuffixMode};
use crate::label::traverse::{traverse_directed, traverse_undirected};
use crate::label::visit::{Barriers, BarrierPolicy};
use crate::ssm::Ssm;

/// Which traversal policy the whole batch runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraversalMode {
    /// Two-phase directed BFS (outgoing, then incoming edges).
    #[default]
    Directed,
    /// Single-phase BFS over the symmetrized edge set.
    Undirected,
}

/// Explicit labeling configuration, fixed per batch invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelOptions {
    pub suffix_mode: SuffixMode,
    pub traversal: TraversalMode,
    pub barrier_policy: BarrierPolicy,
}

/// Label one map in place: for each Responsibility node, in stored order,
/// stamp its zone of influence with that Responsibility's rlabel.
///
/// A node sitting in several zones ends up with several rlabels, appended in
/// Responsibility processing order. A map with zero Responsibility nodes is
/// left untouched.
pub fn label_ssm(ssm: &mut Ssm, file_name: &str, opts: &LabelOptions) -> Result<()> {
    let responsibility_ids = ssm.responsibility_ids();
    log::info!(
        "{}: {} nodes, {} links, {} responsibility node(s)",
        file_name,
        ssm.nodes.len(),
        ssm.links.len(),
        responsibility_ids.len()
    );
    if responsibility_ids.is_empty() {
        return Ok(());
    }

    let suffix = label_suffix(file_name, opts.suffix_mode)?;
    let barriers = Barriers::new(ssm, opts.barrier_policy);
    for &r_id in &responsibility_ids {
        let rlabel = format_rlabel(r_id, &suffix);
        log::debug!("traversing zone of responsibility {} ({})", r_id, rlabel);
        match opts.traversal {
            TraversalMode::Directed => traverse_directed(ssm, r_id, &rlabel, &barriers),
            TraversalMode::Undirected => traverse_undirected(ssm, r_id, &rlabel, &barriers),
        }
    }
    Ok(())
}
