//! Batch orchestration: input enumeration, output naming, and the
//! one-file-at-a-time directory runners.

mod outpath;
mod runner;
mod walker;

pub use outpath::{rcoded_output_name, rlabeled_output_name};
pub use runner::{label_directory, recode_directory, BatchSummary};
pub use walker::discover_ssm_files;
