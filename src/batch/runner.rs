//! Directory runners for the labeling and recode passes.
//!
//! Files are processed strictly sequentially, each written to its own fresh
//! output path; inputs are never mutated, so one file's failure cannot
//! corrupt outputs already written for its siblings. By default a failed
//! file is logged and the batch continues; `fail_fast` aborts on the first
//! error instead.

use std::io;
use std::path::Path;

use crate::batch::outpath::{rcoded_output_name, rlabeled_output_name};
use crate::batch::walker::discover_ssm_files;
use crate::error::{Result, SsmError};
use crate::label::{label_ssm, LabelOptions};
use crate::recode::{replace_rlabels_with_rcodes, CodeLookup};
use crate::ssm::{read_ssm, write_ssm};

/// Outcome counts for one batch run.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

fn require_dir(dir: &Path, what: &str) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(SsmError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} \"{}\" not found", what, dir.display()),
        )))
    }
}

fn ensure_output_dir(out_dir: &Path) -> Result<()> {
    if !out_dir.exists() {
        std::fs::create_dir_all(out_dir).map_err(SsmError::Io)?;
        log::info!("Created {}", out_dir.display());
    }
    Ok(())
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Label every SSM in `in_dir`, writing `<stem>-rlabeled.json` files into
/// `out_dir` (created if absent).
pub fn label_directory(
    in_dir: &Path,
    out_dir: &Path,
    opts: &LabelOptions,
    fail_fast: bool,
) -> Result<BatchSummary> {
    require_dir(in_dir, "input directory")?;
    ensure_output_dir(out_dir)?;

    let files = discover_ssm_files(in_dir)?;
    let mut summary = BatchSummary::default();
    for (idx, in_path) in files.iter().enumerate() {
        let file_name = file_name_of(in_path);
        let out_path = out_dir.join(rlabeled_output_name(&file_name));
        log::info!("[{}/{}] Labeling: {}", idx + 1, files.len(), file_name);
        match label_one(in_path, &out_path, &file_name, opts) {
            Ok(()) => {
                summary.processed += 1;
                log::info!("✓ {} -> {}", file_name, out_path.display());
            }
            Err(e) => {
                summary.failed += 1;
                log::error!("✗ {}: {}", file_name, e);
                if fail_fast {
                    return Err(e);
                }
            }
        }
    }
    Ok(summary)
}

fn label_one(in_path: &Path, out_path: &Path, file_name: &str, opts: &LabelOptions) -> Result<()> {
    let mut ssm = read_ssm(in_path)?;
    label_ssm(&mut ssm, file_name, opts)?;
    write_ssm(&ssm, out_path)
}

/// Recode every rlabeled SSM in `in_dir`, writing `<stem>-rcoded.json` files
/// into `out_dir`. The sorted-responsibilities document is read once up
/// front; a failure there is fatal to the whole batch.
pub fn recode_directory(
    sorted_path: &Path,
    in_dir: &Path,
    out_dir: &Path,
    fail_fast: bool,
) -> Result<BatchSummary> {
    require_dir(in_dir, "rlabeled input directory")?;
    ensure_output_dir(out_dir)?;

    let lookup = CodeLookup::from_file(sorted_path)?;
    log::info!(
        "Code lookup: {} responsibility text(s) from {}",
        lookup.len(),
        sorted_path.display()
    );

    let files = discover_ssm_files(in_dir)?;
    let mut summary = BatchSummary::default();
    for (idx, in_path) in files.iter().enumerate() {
        let file_name = file_name_of(in_path);
        let out_path = out_dir.join(rcoded_output_name(&file_name));
        log::info!("[{}/{}] Recoding: {}", idx + 1, files.len(), file_name);
        match recode_one(in_path, &out_path, &lookup) {
            Ok(()) => {
                summary.processed += 1;
                log::info!("✓ {} -> {}", file_name, out_path.display());
            }
            Err(e) => {
                summary.failed += 1;
                log::error!("✗ {}: {}", file_name, e);
                if fail_fast {
                    return Err(e);
                }
            }
        }
    }
    Ok(summary)
}

fn recode_one(in_path: &Path, out_path: &Path, lookup: &CodeLookup) -> Result<()> {
    let mut ssm = read_ssm(in_path)?;
    replace_rlabels_with_rcodes(&mut ssm, lookup);
    write_ssm(&ssm, out_path)
}
