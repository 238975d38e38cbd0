//! # RippleScope
//!
//! Real-time animated ripple surface, drawn either as a plain wireframe or as
//! a depth-sorted hidden-line mesh coloured by height.
//!
//! ## Architecture
//!
//! RippleScope is organized as a workspace with multiple crates:
//!
//! 1. **ripplescope-core** - Constants, height field, transform, projection, grid sampling
//! 2. **ripplescope-visualizer** - Drawing surfaces, mesh building, frame rendering
//! 3. **ripplescope** - Driver binary: window, frame pacing, headless export

pub mod cli;
pub mod driver;

pub use ripplescope_core::{RenderMode, SceneConfig};
pub use ripplescope_visualizer::{FrameStats, PixmapSurface, SurfaceRenderer};

use cli::Cli;
use driver::HeadlessOptions;
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Cargo profile the binary was built with
pub const BUILD_PROFILE: &str = env!("BUILD_PROFILE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output, pretty or JSON lines
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stdout)
                    .with_target(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

/// The fixed scene constants as pretty-printed JSON.
pub fn scene_config_json() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&SceneConfig::default())?)
}

/// Build the renderer for `cli.mode` and hand it to the selected driver.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    info!(
        "RippleScope {} ({} build, {})",
        VERSION, BUILD_PROFILE, BUILD_DATE
    );

    let renderer = SurfaceRenderer::new(SceneConfig::default(), cli.mode)?;
    let lattice = renderer.sampler().lattice();
    info!(
        "Scene: {}x{} vertex grid, {} mode",
        lattice.side(),
        lattice.side(),
        cli.mode
    );

    if cli.headless {
        let options = HeadlessOptions {
            frames: cli.frames,
            fps: cli.fps,
            out_dir: cli.out.clone(),
        };
        driver::run_headless(&renderer, &options)?;
        Ok(())
    } else {
        driver::run_windowed(renderer, cli.fps)
    }
}
