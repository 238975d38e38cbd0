//! Typed scene parameters.
//!
//! Groups the fixed constants by concern. Every `Default` impl returns the
//! values from [`crate::constants`]; tests and benches build variants with
//! struct update syntax.

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Color;
use serde::{Deserialize, Serialize};

/// Output surface and camera parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Projection factor
    pub fov: f64,
    /// Camera distance from the origin
    pub viewer_distance: f64,
    /// Depth at or below which vertices are culled
    pub near_epsilon: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            fov: FOV,
            viewer_distance: VIEWER_DISTANCE,
            near_epsilon: NEAR_EPSILON,
        }
    }
}

/// Vertex lattice extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Half-size in world units
    pub radius: i32,
    /// Vertex spacing in world units
    pub step: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: GRID_RADIUS,
            step: GRID_STEP,
        }
    }
}

impl GridConfig {
    /// Number of vertices along one axis: `2R/step + 1`.
    pub fn axis_len(&self) -> usize {
        (2 * self.radius / self.step) as usize + 1
    }
}

/// Object spin and presentation tilt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Radians per second about the vertical axis
    pub spin_rate: f64,
    /// Fixed tilt about the X axis in radians
    pub tilt_x: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            spin_rate: SPIN_RATE,
            tilt_x: BASE_TILT_X,
        }
    }
}

/// Height field parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RippleConfig {
    pub frequency: f64,
    pub speed: f64,
    pub decay: f64,
    pub height_scale: f64,
    pub amplitude_falloff: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            frequency: RIPPLE_FREQ,
            speed: RIPPLE_SPEED,
            decay: RIPPLE_DECAY,
            height_scale: HEIGHT_SCALE,
            amplitude_falloff: AMPLITUDE_FALLOFF,
        }
    }
}

/// Fixed colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub line: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_tuple(BG_COLOR),
            line: Color::from_tuple(LINE_COLOR),
        }
    }
}

/// Complete parameter set for one run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    pub view: ViewConfig,
    pub grid: GridConfig,
    pub motion: MotionConfig,
    pub ripple: RippleConfig,
    pub palette: Palette,
}

impl SceneConfig {
    /// Reject parameter sets that cannot produce a lattice or a projection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if grid.step <= 0 {
            return Err(ConfigError::NonPositiveStep { step: grid.step });
        }
        if grid.radius < 0 {
            return Err(ConfigError::NegativeRadius {
                radius: grid.radius,
            });
        }
        if grid.radius % grid.step != 0 {
            return Err(ConfigError::UnevenLattice {
                radius: grid.radius,
                step: grid.step,
            });
        }

        let view = &self.view;
        if view.width == 0 || view.height == 0 {
            return Err(ConfigError::EmptySurface {
                width: view.width,
                height: view.height,
            });
        }

        for (name, value) in [
            ("fov", view.fov),
            ("viewer_distance", view.viewer_distance),
            ("near_epsilon", view.near_epsilon),
            ("height_scale", self.ripple.height_scale),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        Ok(())
    }
}
