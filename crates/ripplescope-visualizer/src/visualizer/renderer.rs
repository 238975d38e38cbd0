//! Frame renderer for both drawing modes.
//!
//! Hidden-line mode is a painter's algorithm: quads are drawn far to near,
//! each first filled with the background colour so that it overpaints any
//! farther edges behind it, then outlined with height-coloured edges.

use super::mesh::{build_quads, wireframe_segments, Quad};
use super::surface::DrawSurface;
use ripplescope_core::{
    amplitude_color, Color, ConfigError, RenderMode, SceneConfig, SurfaceSampler, VertexGrid,
};
use tracing::trace;

/// Counters for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Time the frame was rendered for, in seconds.
    pub time: f64,
    pub vertices: usize,
    pub culled: usize,
    /// Lines drawn in wireframe mode.
    pub segments: usize,
    /// Quads drawn in hidden-line mode.
    pub quads: usize,
}

/// Order quads farthest first. Ties keep no particular order.
pub fn sort_far_to_near(quads: &mut [Quad]) {
    quads.sort_unstable_by(|a, b| b.avg_depth.total_cmp(&a.avg_depth));
}

/// Draw every grid link in a single colour. Returns the number of lines.
pub fn draw_wireframe<S>(surface: &mut S, grid: &VertexGrid, color: Color) -> usize
where
    S: DrawSurface + ?Sized,
{
    let mut count = 0;
    for seg in wireframe_segments(grid) {
        surface.draw_line(seg.from, seg.to, color);
        count += 1;
    }
    count
}

/// Draw depth-sorted, background-filled quads with hue-mapped edges.
/// Returns the number of quads.
pub fn draw_hidden_line<S>(
    surface: &mut S,
    grid: &VertexGrid,
    background: Color,
    height_scale: f64,
) -> usize
where
    S: DrawSurface + ?Sized,
{
    let mut quads = build_quads(grid);
    sort_far_to_near(&mut quads);

    for quad in &quads {
        surface.fill_polygon(&quad.outline(), background);
        for edge in quad.edges() {
            let color = amplitude_color(edge.avg_amplitude, height_scale);
            surface.draw_line(edge.from, edge.to, color);
        }
    }

    quads.len()
}

/// Per-run render context: parameters, mode and the prepared sampler.
///
/// Owned by the driver; each frame borrows a surface and a time value.
#[derive(Debug, Clone)]
pub struct SurfaceRenderer {
    config: SceneConfig,
    mode: RenderMode,
    sampler: SurfaceSampler,
}

impl SurfaceRenderer {
    pub fn new(config: SceneConfig, mode: RenderMode) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sampler: SurfaceSampler::new(&config, mode),
            config,
            mode,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn sampler(&self) -> &SurfaceSampler {
        &self.sampler
    }

    /// Clear `surface` and draw the surface as it stands at time `t`.
    pub fn render_frame<S>(&self, surface: &mut S, t: f64) -> FrameStats
    where
        S: DrawSurface + ?Sized,
    {
        let palette = self.config.palette;
        surface.clear(palette.background);

        let grid = self.sampler.generate_grid_points(t);
        let mut stats = FrameStats {
            time: t,
            vertices: grid.vertices().len(),
            culled: grid.culled_count(),
            ..Default::default()
        };

        match self.mode {
            RenderMode::Wireframe => {
                stats.segments = draw_wireframe(surface, &grid, palette.line);
            }
            RenderMode::HiddenLine => {
                stats.quads = draw_hidden_line(
                    surface,
                    &grid,
                    palette.background,
                    self.config.ripple.height_scale,
                );
            }
        }

        trace!(
            t,
            mode = %self.mode,
            culled = stats.culled,
            segments = stats.segments,
            quads = stats.quads,
            "Rendered frame"
        );
        stats
    }
}
