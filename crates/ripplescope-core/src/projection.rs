//! Perspective projection from camera space to screen pixels.

use crate::config::ViewConfig;
use crate::types::{CameraPoint, ProjectedVertex, ScreenVertex};

/// Pinhole projection centred on the output surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    fov: f64,
    viewer_distance: f64,
    near_epsilon: f64,
    center_x: f64,
    center_y: f64,
}

impl Projector {
    pub fn new(view: ViewConfig) -> Self {
        Self {
            fov: view.fov,
            viewer_distance: view.viewer_distance,
            near_epsilon: view.near_epsilon,
            center_x: view.width as f64 / 2.0,
            center_y: view.height as f64 / 2.0,
        }
    }

    /// Depth of a camera-space point along the view axis.
    #[inline]
    pub fn depth(&self, p: &CameraPoint) -> f64 {
        self.viewer_distance + p.z
    }

    /// Project `p`, carrying `amplitude` along for colouring.
    ///
    /// Returns `None` when the point lies at or behind the near plane; such a
    /// vertex and every primitive touching it are skipped for the frame.
    pub fn project(&self, p: &CameraPoint, amplitude: f64) -> ProjectedVertex {
        let depth = self.depth(p);
        if depth <= self.near_epsilon {
            return None;
        }
        let factor = self.fov / depth;
        Some(ScreenVertex {
            x: p.x * factor + self.center_x,
            // Screen Y grows downward.
            y: -p.y * factor + self.center_y,
            depth,
            amplitude,
        })
    }
}
