//! Object-to-camera transform: spin about Z, then presentation tilt about X.

use crate::config::MotionConfig;
use crate::types::CameraPoint;
use glam::{DMat3, DVec3};

/// Builds the per-frame rotation from the motion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformer {
    spin_rate: f64,
    tilt_x: f64,
}

impl Transformer {
    pub fn new(motion: MotionConfig) -> Self {
        Self {
            spin_rate: motion.spin_rate,
            tilt_x: motion.tilt_x,
        }
    }

    /// Spin angle at time `t`. Grows without wrapping.
    pub fn spin_angle(&self, t: f64) -> f64 {
        t * self.spin_rate
    }

    /// Rotation for time `t`. The tilt is applied after the spin so the spin
    /// axis stays vertical in object space.
    pub fn at(&self, t: f64) -> FrameTransform {
        FrameTransform::from_angles(self.spin_angle(t), self.tilt_x)
    }
}

/// Rotation for a single frame, shared by every vertex of that frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    rotation: DMat3,
}

impl FrameTransform {
    pub fn from_angles(spin: f64, tilt: f64) -> Self {
        Self {
            rotation: DMat3::from_rotation_x(tilt) * DMat3::from_rotation_z(spin),
        }
    }

    /// Map an object-space `(x, y, height)` triple into camera space.
    pub fn apply(&self, x: f64, y: f64, z: f64) -> CameraPoint {
        let p = self.rotation * DVec3::new(x, y, z);
        CameraPoint::new(p.x, p.y, p.z)
    }
}
