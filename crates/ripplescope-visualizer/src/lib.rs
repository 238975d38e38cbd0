//! # RippleScope Visualizer
//!
//! Turns sampled surface grids into frames: builds wireframe segments or
//! hidden-line quads and draws them onto any [`DrawSurface`].

pub mod visualizer;

pub use ripplescope_core as core;

pub use visualizer::{
    build_quads, draw_hidden_line, draw_wireframe, sort_far_to_near, wireframe_segments,
    DrawCommand, DrawList, DrawSurface, Edge, FrameStats, PixmapSurface, Quad, Segment,
    SurfaceRenderer,
};
