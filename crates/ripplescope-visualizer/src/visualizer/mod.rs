//! Surface visualization (software raster)
//!
//! This module provides:
//! - The drawing surface abstraction and a recording surface (surface)
//! - A tiny-skia pixel buffer backend (pixmap_surface)
//! - Wireframe segments and hidden-line quads (mesh)
//! - Painter's-algorithm frame rendering (renderer)

pub mod mesh;
pub mod pixmap_surface;
pub mod renderer;
pub mod surface;

pub use mesh::{build_quads, wireframe_segments, Edge, Quad, Segment};
pub use pixmap_surface::PixmapSurface;
pub use renderer::{
    draw_hidden_line, draw_wireframe, sort_far_to_near, FrameStats, SurfaceRenderer,
};
pub use surface::{DrawCommand, DrawList, DrawSurface};
