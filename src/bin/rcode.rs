use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ssmtag::batch::recode_directory;

#[derive(Parser, Debug)]
#[command(name = "rcode")]
#[command(about = "Rewrite rlabel suffixes into human-assigned rcodes")]
struct Args {
    /// Sorted-responsibilities document (Responsibility texts grouped by code)
    sorted_file: PathBuf,

    /// Directory of rlabeled SSM .json files
    indir: PathBuf,

    /// Output directory for rcoded SSMs (created if absent)
    outdir: PathBuf,

    /// Abort on the first failed file instead of continuing with the rest
    #[arg(long)]
    fail_fast: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", "info")
    ).init();

    let args = Args::parse();

    log::info!("Starting rcode batch");
    log::info!("Sorted responsibilities: {}", args.sorted_file.display());
    log::info!("Input directory: {}", args.indir.display());
    log::info!("Output directory: {}", args.outdir.display());

    let summary =
        recode_directory(&args.sorted_file, &args.indir, &args.outdir, args.fail_fast)?;

    log::info!("=== Recoding Complete ===");
    log::info!(
        "Files recoded: {} (errors: {})",
        summary.processed,
        summary.failed
    );
    if summary.failed > 0 {
        log::warn!("Some files failed to recode. Check logs above for details.");
        if summary.processed == 0 {
            anyhow::bail!("all {} input file(s) failed", summary.failed);
        }
    }

    Ok(())
}
