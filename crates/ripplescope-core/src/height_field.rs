//! Procedural ripple height field.
//!
//! A radial cosine wave travelling outward from the origin, damped by an
//! exponential envelope. In [`AmplitudeProfile::Falloff`] the amplitude itself
//! also shrinks with radius, which steepens the flattening toward the edges.

use crate::config::RippleConfig;
use crate::types::AmplitudeProfile;

/// Evaluates elevation for a fixed parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightField {
    ripple: RippleConfig,
    profile: AmplitudeProfile,
}

impl HeightField {
    pub fn new(ripple: RippleConfig, profile: AmplitudeProfile) -> Self {
        Self { ripple, profile }
    }

    pub fn profile(&self) -> AmplitudeProfile {
        self.profile
    }

    /// Peak amplitude at radius `r`, before wave and envelope.
    pub fn amplitude_at(&self, r: f64) -> f64 {
        match self.profile {
            AmplitudeProfile::Constant => self.ripple.height_scale,
            AmplitudeProfile::Falloff => {
                self.ripple.height_scale / (1.0 + self.ripple.amplitude_falloff * r)
            }
        }
    }

    /// Elevation at `(x, y)` at time `t` seconds.
    pub fn height(&self, x: f64, y: f64, t: f64) -> f64 {
        let r = x.hypot(y);
        let wave = (r * self.ripple.frequency - t * self.ripple.speed).cos();
        let envelope = (-r * self.ripple.decay).exp();
        wave * envelope * self.amplitude_at(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field(profile: AmplitudeProfile) -> HeightField {
        HeightField::new(RippleConfig::default(), profile)
    }

    #[test]
    fn test_origin_reduces_to_time_cosine() {
        let hf = field(AmplitudeProfile::Falloff);
        for t in [0.0, 0.3, 1.7, 12.5, 600.0] {
            let expected = (-t * 4.0_f64).cos() * 20.0;
            assert!(
                (hf.height(0.0, 0.0, t) - expected).abs() < 1e-9,
                "t={t}: {} vs {expected}",
                hf.height(0.0, 0.0, t)
            );
        }
    }

    #[test]
    fn test_constant_profile_amplitude() {
        let hf = field(AmplitudeProfile::Constant);
        assert_eq!(hf.amplitude_at(0.0), 20.0);
        assert_eq!(hf.amplitude_at(28.0), 20.0);
    }

    #[test]
    fn test_falloff_profile_amplitude() {
        let hf = field(AmplitudeProfile::Falloff);
        assert_eq!(hf.amplitude_at(0.0), 20.0);
        let at_10 = 20.0 / (1.0 + 0.06 * 10.0);
        assert!((hf.amplitude_at(10.0) - at_10).abs() < 1e-12);
        assert!(hf.amplitude_at(20.0) < hf.amplitude_at(10.0));
    }

    #[test]
    fn test_radially_symmetric() {
        let hf = field(AmplitudeProfile::Falloff);
        let a = hf.height(3.0, 4.0, 1.25);
        let b = hf.height(-4.0, 3.0, 1.25);
        let c = hf.height(0.0, -5.0, 1.25);
        assert!((a - b).abs() < 1e-12);
        assert!((a - c).abs() < 1e-12);
    }

    #[test]
    fn test_falloff_is_flatter_than_constant_away_from_origin() {
        let constant = field(AmplitudeProfile::Constant);
        let falloff = field(AmplitudeProfile::Falloff);
        // Pick a time where the wave crest sits on r = 20.
        let t = 20.0 * 0.65 / 4.0;
        assert!(falloff.height(20.0, 0.0, t) < constant.height(20.0, 0.0, t));
    }

    proptest! {
        #[test]
        fn prop_height_bounded_by_amplitude(
            x in -40.0f64..40.0,
            y in -40.0f64..40.0,
            t in 0.0f64..1000.0,
            falloff in any::<bool>(),
        ) {
            let profile = if falloff {
                AmplitudeProfile::Falloff
            } else {
                AmplitudeProfile::Constant
            };
            let hf = field(profile);
            let bound = hf.amplitude_at(x.hypot(y));
            prop_assert!(hf.height(x, y, t).abs() <= bound + 1e-9);
        }
    }
}
