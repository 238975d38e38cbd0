//! Error handling for RippleScope
//!
//! The geometry pipeline itself cannot fail: culled vertices are represented
//! as absent values, not errors. The types here cover the edges of the
//! system:
//! - Configuration errors (parameter sets that cannot produce a mesh)
//! - Render errors (surface allocation and frame export)
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// Configuration error type
///
/// Raised by [`crate::config::SceneConfig::validate`] for parameter sets the
/// pipeline cannot sample or project.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid step must be strictly positive
    #[error("Grid step must be positive, got {step}")]
    NonPositiveStep {
        /// The rejected step.
        step: i32,
    },

    /// Grid radius must be non-negative
    #[error("Grid radius must be non-negative, got {radius}")]
    NegativeRadius {
        /// The rejected radius.
        radius: i32,
    },

    /// The step must divide the radius so the lattice is symmetric
    #[error("Grid step {step} does not divide radius {radius}")]
    UnevenLattice {
        /// The grid radius.
        radius: i32,
        /// The grid step.
        step: i32,
    },

    /// A scalar parameter that must be positive is not
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Surface dimensions must be non-zero
    #[error("Surface size must be non-zero, got {width}x{height}")]
    EmptySurface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

/// Render error type
///
/// Represents failures of the drawing backend, never of the geometry.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The pixel buffer could not be allocated
    #[error("Cannot allocate a {width}x{height} surface")]
    SurfaceAllocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Frame could not be encoded or written
    #[error("Failed to export frame: {reason}")]
    Export {
        /// The reason the export failed.
        reason: String,
    },
}

/// Main error type for RippleScope
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a render error
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Render(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnevenLattice { radius: 7, step: 2 };
        assert_eq!(err.to_string(), "Grid step 2 does not divide radius 7");
    }

    #[test]
    fn test_error_from_config() {
        let err: Error = ConfigError::NonPositiveStep { step: 0 }.into();
        assert!(err.is_config_error());
        assert!(!err.is_render_error());
        assert_eq!(err.to_string(), "Grid step must be positive, got 0");
    }

    #[test]
    fn test_error_from_render() {
        let err: Error = RenderError::SurfaceAllocation {
            width: 0,
            height: 10,
        }
        .into();
        assert!(err.is_render_error());
        assert_eq!(err.to_string(), "Cannot allocate a 0x10 surface");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
