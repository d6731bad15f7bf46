//! AudioBoost - soft-clip dynamic range compressor
//!
//! Set RUST_LOG=debug for engine and file details.

use anyhow::{Context, Result};
use clap::Parser;

use boost_cli::{default_config_yaml, process_file, Args, RunOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    if args.generate_config {
        print!("{}", default_config_yaml()?);
        return Ok(());
    }

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("rayon-boost-{}", i))
            .build_global()
            .context("Failed to initialize Rayon thread pool")?;
        log::info!("Rayon thread pool initialized with {} threads", threads);
    }

    let params = args.resolve_params()?;
    let (input, output) = args.io_paths()?;
    let options = RunOptions {
        block_frames: args.block_frames,
        parallel: args.parallel,
    };

    log::info!("audioboost: {:?} -> {:?}", input, output);
    let summary = process_file(input, output, &params, &options)?;

    log::info!(
        "audioboost: {} frames ({} ch @ {} Hz), peak {:.4}, {:.2}s",
        summary.frames,
        summary.info.channels,
        summary.info.sample_rate,
        summary.peak,
        summary.elapsed_secs
    );
    Ok(())
}
