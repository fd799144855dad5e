//! Grating - diffraction grating spacing calculator
//!
//! 5回の角度測定から格子間隔とその不確かさを計算

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use grating::adapter::config::Config;
use grating::driver::{Args, GratingWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (defaults when the file is absent)
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = GratingWorkflow::new(config);

    workflow.execute(args).await
}
