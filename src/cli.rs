// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "glb-viewer")]
#[command(about = "Inspect GLB models: materials, vertex count and bounds", long_about = None)]
pub struct Cli {
    /// GLB files to open, in selection order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print the final view model as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Keep the onboarding flag in memory instead of the settings file
    #[arg(long)]
    pub ephemeral: bool,

    /// Give up waiting for a load after this many seconds
    #[arg(long = "wait-secs", default_value_t = 60.0)]
    pub wait_secs: f32,
}
