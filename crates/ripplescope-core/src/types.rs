//! Shared data model for the surface pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_tuple(rgb: (u8, u8, u8)) -> Self {
        Self::new(rgb.0, rgb.1, rgb.2)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How the surface is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Grid-adjacent vertices joined by lines in a single colour, no occlusion.
    Wireframe,
    /// Depth-sorted quads filled with the background, edges coloured by height.
    #[default]
    HiddenLine,
}

impl RenderMode {
    /// Amplitude profile the height field uses in this mode.
    pub fn amplitude_profile(self) -> AmplitudeProfile {
        match self {
            Self::Wireframe => AmplitudeProfile::Constant,
            Self::HiddenLine => AmplitudeProfile::Falloff,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wireframe => write!(f, "wireframe"),
            Self::HiddenLine => write!(f, "hidden-line"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wireframe" | "wire" => Ok(Self::Wireframe),
            "hidden-line" | "hidden" | "hiddenline" => Ok(Self::HiddenLine),
            _ => Err(format!("Unknown render mode: {}", s)),
        }
    }
}

/// Wave amplitude as a function of radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmplitudeProfile {
    /// `HEIGHT_SCALE` everywhere.
    Constant,
    /// `HEIGHT_SCALE / (1 + AMPLITUDE_FALLOFF * r)`.
    Falloff,
}

/// Untransformed lattice position of a mesh vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    pub x: i32,
    pub y: i32,
}

impl GridCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A lattice vertex with its elevation at the current frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledVertex {
    pub coord: GridCoordinate,
    pub elevation: f64,
}

/// Camera-space point after spin and presentation tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CameraPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Point in screen pixels (Y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A vertex that survived projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenVertex {
    pub x: f64,
    pub y: f64,
    /// Distance along the view axis; larger is farther.
    pub depth: f64,
    /// Absolute elevation, used for hue mapping.
    pub amplitude: f64,
}

impl ScreenVertex {
    pub fn point(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }
}

/// Projection result for one lattice vertex; `None` when behind the camera.
pub type ProjectedVertex = Option<ScreenVertex>;
