//! Fixed scene constants.
//!
//! These are the values the surface is rendered with. They are grouped into
//! typed structs by [`crate::config`], whose `Default` impls read from here.

/// Window title shown by the windowed driver.
pub const WINDOW_TITLE: &str = "Spinning Ripple Surface";

// --- Surface ---

/// Output surface width in pixels.
pub const WIDTH: u32 = 960;

/// Output surface height in pixels.
pub const HEIGHT: u32 = 720;

/// Frame cap for the windowed driver.
pub const FPS: u32 = 60;

// --- Camera ---

/// Projection factor (screen units per world unit at unit depth).
pub const FOV: f64 = 700.0;

/// Distance from the camera to the surface origin.
pub const VIEWER_DISTANCE: f64 = 90.0;

/// Depth at or below which a vertex is treated as behind the camera.
pub const NEAR_EPSILON: f64 = 0.1;

// --- Grid ---

/// Half-size of the vertex grid in world units.
pub const GRID_RADIUS: i32 = 28;

/// Spacing between grid vertices in world units.
pub const GRID_STEP: i32 = 1;

// --- Motion ---

/// Presentation tilt about the X axis (radians), applied after the spin.
pub const BASE_TILT_X: f64 = 55.0 * std::f64::consts::PI / 180.0;

/// Spin rate about the vertical axis (radians per second).
pub const SPIN_RATE: f64 = 0.25;

// --- Ripple ---

/// Ripple density along the radius.
pub const RIPPLE_FREQ: f64 = 0.65;

/// Ripple phase speed over time.
pub const RIPPLE_SPEED: f64 = 4.0;

/// Radial damping of the envelope.
pub const RIPPLE_DECAY: f64 = 0.015;

/// Base wave amplitude.
pub const HEIGHT_SCALE: f64 = 20.0;

/// Amplitude shrink per unit of radius (hidden-line mode only).
pub const AMPLITUDE_FALLOFF: f64 = 0.06;

// --- Colours ---

/// Background colour.
pub const BG_COLOR: (u8, u8, u8) = (10, 12, 18);

/// Fallback line colour used by the plain wireframe mode.
pub const LINE_COLOR: (u8, u8, u8) = (70, 220, 255);
