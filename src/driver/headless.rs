//! Offscreen driver: renders a fixed number of frames to PNG files.

use super::clock::FrameClock;
use anyhow::Context;
use ripplescope_visualizer::{PixmapSurface, SurfaceRenderer};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// What to render and where.
#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub frames: u32,
    /// Scene time advances by `1 / fps` per frame.
    pub fps: u32,
    pub out_dir: PathBuf,
}

/// File name for frame `index` inside `out_dir`.
pub fn frame_path(out_dir: &Path, index: u32) -> PathBuf {
    out_dir.join(format!("frame_{:04}.png", index))
}

/// Render `options.frames` frames and return the written paths in order.
pub fn run_headless(
    renderer: &SurfaceRenderer,
    options: &HeadlessOptions,
) -> anyhow::Result<Vec<PathBuf>> {
    let view = renderer.config().view;
    std::fs::create_dir_all(&options.out_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            options.out_dir.display()
        )
    })?;

    let mut surface = PixmapSurface::new(view.width, view.height)?;
    let mut clock = FrameClock::fixed(options.fps);
    let mut written = Vec::with_capacity(options.frames as usize);
    let started = Instant::now();

    for index in 0..options.frames {
        let t = clock.sample();
        let stats = renderer.render_frame(&mut surface, t);
        let path = frame_path(&options.out_dir, index);
        surface
            .save_png(&path)
            .with_context(|| format!("Failed to write frame {}", index))?;
        debug!(
            frame = index,
            t,
            quads = stats.quads,
            segments = stats.segments,
            culled = stats.culled,
            "Exported frame"
        );
        written.push(path);
    }

    info!(
        "Rendered {} {} frames to {} in {:.2?}",
        written.len(),
        renderer.mode(),
        options.out_dir.display(),
        started.elapsed()
    );
    Ok(written)
}
