//! Command-line interface.

use clap::Parser;
use ripplescope_core::constants::FPS;
use ripplescope_core::RenderMode;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "ripplescope", version)]
#[command(about = "Spinning ripple surface rendered as a wireframe or hidden-line mesh", long_about = None)]
pub struct Cli {
    /// Drawing mode: `wireframe` or `hidden-line`
    #[arg(long, default_value_t = RenderMode::HiddenLine)]
    pub mode: RenderMode,

    /// Frame rate cap; in headless mode, the number of frames per scene second
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Render to PNG files instead of opening a window
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Number of frames to export in headless mode
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Output directory for headless frames
    #[arg(long, default_value = "frames")]
    pub out: PathBuf,

    /// Print the scene constants as JSON and exit
    #[arg(long, default_value_t = false)]
    pub print_config: bool,

    /// Emit logs as JSON lines instead of the pretty format
    #[arg(long, default_value_t = false)]
    pub log_json: bool,
}
