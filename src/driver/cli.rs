//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// 5回の角度測定から回折格子の格子間隔を求めるCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "grating")]
#[command(
    about = "Compute diffraction grating spacing from five spectrometer angle readings",
    long_about = None
)]
pub struct Args {
    /// Five angle readings as degrees°minutes′ (e.g. 30°15.5′).
    /// Without readings, the last saved session is shown
    #[arg(value_name = "ANGLE")]
    pub angles: Vec<String>,

    /// Delete the saved session
    #[arg(long, conflicts_with = "angles")]
    pub clear: bool,

    /// Don't save this computation as the last session
    #[arg(long)]
    pub no_save: bool,

    /// Session file path (overrides the config file)
    #[arg(long)]
    pub session: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "./grating.json")]
    pub config: String,
}
