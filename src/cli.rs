// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "lemniscate")]
#[command(about = "Plot a damped sine and a polar flower", long_about = None)]
pub struct Cli {
    /// Number of segments used to approximate each function
    #[arg(long, default_value_t = 500)]
    pub smoothness: u32,

    /// Hide the axis lines and tick marks
    #[arg(long = "no-axis", default_value = "false")]
    pub no_axis: bool,

    /// JSON file overriding the default rendering style
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Exit after this many frames instead of waiting for a window to close
    #[arg(long)]
    pub frames: Option<u64>,
}
