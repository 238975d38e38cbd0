//! Platform glue around the surface renderer.
//!
//! Owns the frame loop, the time source and the drawing surface. Two
//! front-ends share the same renderer: an interactive window and an offscreen
//! PNG exporter.

pub mod clock;
pub mod headless;
pub mod window;

pub use clock::{FrameClock, FrameLimiter};
pub use headless::{frame_path, run_headless, HeadlessOptions};
pub use window::run_windowed;
