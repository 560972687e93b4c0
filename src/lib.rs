pub mod batch;
pub mod error;
pub mod label;
pub mod recode;
pub mod ssm;

pub use error::{Result, SsmError};
pub use label::{label_ssm, BarrierPolicy, LabelOptions, SuffixMode, TraversalMode};
pub use recode::{replace_rlabels_with_rcodes, CodeLookup};
pub use ssm::{Edge, Node, NodeKind, Ssm};
