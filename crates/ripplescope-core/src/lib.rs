//! # RippleScope Core
//!
//! Geometry for the animated ripple surface: the fixed scene constants,
//! the height field, the spin+tilt transform, perspective projection and
//! per-frame grid sampling, plus the height-to-hue colour mapping.
//! Nothing here touches a window or a pixel buffer.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod height_field;
pub mod projection;
pub mod transform;
pub mod types;

pub use color::{amplitude_color, height_hue, hsv_to_rgb};
pub use config::{GridConfig, MotionConfig, Palette, RippleConfig, SceneConfig, ViewConfig};
pub use error::{ConfigError, Error, RenderError, Result};
pub use grid::{generate_grid_points, GridLattice, SurfaceSampler, VertexGrid};
pub use height_field::HeightField;
pub use projection::Projector;
pub use transform::{FrameTransform, Transformer};
pub use types::{
    AmplitudeProfile, CameraPoint, Color, GridCoordinate, ProjectedVertex, RenderMode,
    SampledVertex, ScreenPoint, ScreenVertex,
};
