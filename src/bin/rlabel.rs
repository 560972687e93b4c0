use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ssmtag::batch::label_directory;
use ssmtag::{BarrierPolicy, LabelOptions, SuffixMode, TraversalMode};

#[derive(Parser, Debug)]
#[command(name = "rlabel")]
#[command(about = "Stamp every node in each Responsibility's zone of influence with an rlabel")]
struct Args {
    /// Directory of SSM .json files
    indir: PathBuf,

    /// Output directory for rlabeled SSMs (created if absent)
    outdir: PathBuf,

    /// Build the rlabel suffix from the whole file name (extension stripped)
    /// instead of its trailing digit run
    #[arg(short = 'f', long)]
    full_filename: bool,

    /// Traverse Responsibility subgraphs ignoring edge direction
    #[arg(short, long)]
    undirected: bool,

    /// Also install the single Role node as a traversal barrier (historical
    /// policy from before Roles were coded)
    #[arg(long)]
    role_barrier: bool,

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

    let opts = LabelOptions {
        suffix_mode: if args.full_filename {
            SuffixMode::FullFileName
        } else {
            SuffixMode::TrailingDigits
        },
        traversal: if args.undirected {
            TraversalMode::Undirected
        } else {
            TraversalMode::Directed
        },
        barrier_policy: if args.role_barrier {
            BarrierPolicy::WithRole
        } else {
            BarrierPolicy::Responsibilities
        },
    };

    log::info!("Starting rlabel batch");
    log::info!("Input directory: {}", args.indir.display());
    log::info!("Output directory: {}", args.outdir.display());

    let summary = label_directory(&args.indir, &args.outdir, &opts, args.fail_fast)?;

    log::info!("=== Labeling Complete ===");
    log::info!(
        "Files labeled: {} (errors: {})",
        summary.processed,
        summary.failed
    );
    if summary.failed > 0 {
        log::warn!("Some files failed to label. Check logs above for details.");
        if summary.processed == 0 {
            anyhow::bail!("all {} input file(s) failed", summary.failed);
        }
    }

    Ok(())
}
