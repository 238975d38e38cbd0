//! Height-to-hue colour mapping.

use crate::types::Color;

/// Hue in `[0, 1]` for an edge with the given mean amplitude.
///
/// Divides by the base `height_scale` even in falloff mode, so vertices far
/// from the origin never reach the top of the range.
#[inline]
pub fn height_hue(avg_amplitude: f64, height_scale: f64) -> f64 {
    (avg_amplitude / height_scale).clamp(0.0, 1.0)
}

/// Convert HSV in `[0, 1]` to 8-bit RGB, truncating each channel.
///
/// Hue 1.0 wraps to the red sector, like hue 0.0.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Color {
    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let sector = (h * 6.0).trunc();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };
    Color::new(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(c: f64) -> u8 {
    (c * 255.0).clamp(0.0, 255.0) as u8
}

/// Fully saturated, full-value colour for a mean edge amplitude.
pub fn amplitude_color(avg_amplitude: f64, height_scale: f64) -> Color {
    hsv_to_rgb(height_hue(avg_amplitude, height_scale), 1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_amplitude_is_red() {
        assert_eq!(height_hue(0.0, 20.0), 0.0);
        assert_eq!(amplitude_color(0.0, 20.0), Color::new(255, 0, 0));
    }

    #[test]
    fn test_full_amplitude_clamps_to_one() {
        assert_eq!(height_hue(20.0, 20.0), 1.0);
        assert_eq!(height_hue(45.0, 20.0), 1.0);
        assert_eq!(amplitude_color(45.0, 20.0), Color::new(255, 0, 0));
    }

    #[test]
    fn test_primary_sectors() {
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Color::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Color::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), Color::new(0, 255, 255));
    }

    #[test]
    fn test_channels_truncate() {
        // h = 0.1 -> sector 0, f = 0.6, t = 0.6 -> 153.0
        assert_eq!(hsv_to_rgb(0.1, 1.0, 1.0), Color::new(255, 153, 0));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 0.5), Color::new(127, 127, 127));
    }

    proptest! {
        #[test]
        fn prop_hue_monotonic(a in 0.0f64..40.0, b in 0.0f64..40.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(height_hue(lo, 20.0) <= height_hue(hi, 20.0));
        }

        #[test]
        fn prop_hue_in_unit_range(a in -10.0f64..100.0) {
            let h = height_hue(a, 20.0);
            prop_assert!((0.0..=1.0).contains(&h));
        }
    }
}
