//! rlabel engine: label formatting, barrier-bounded BFS traversal, and the
//! per-map labeling driver.
//!
//! Each Responsibility node roots a "zone of influence": the subgraph of
//! nodes reachable from it without crossing another Responsibility. Every
//! node in the zone gets the root's rlabel appended to its name and recorded
//! in its `rlabels` list.

mod driver;
mod format;
mod traverse;
mod visit;

pub use driver::{label_ssm, LabelOptions, TraversalMode};
pub use format::{build_rlabel, format_rlabel, label_suffix, SuffixMode};
pub use visit::{Barriers, BarrierPolicy, VisitSet};
