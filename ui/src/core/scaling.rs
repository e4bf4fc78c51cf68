//! Proportional-symbol radius scaling.

use std::f64::consts::PI;

/// Fixed scale factor applied to raw ridership counts before the
/// area-to-radius conversion.
pub const SCALE_FACTOR: f64 = 0.01;

/// Map a raw ridership count to a display radius such that the symbol's
/// *area* — not its radius — is linearly proportional to the value. Scaling
/// the radius directly would visually overstate magnitude differences.
///
/// NaN and negative inputs are treated as zero-area.
pub fn prop_radius(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    let area = value * SCALE_FACTOR / 2.0;
    (area / PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_value_maps_to_zero_radius() {
        assert_eq!(prop_radius(0.0), 0.0);
    }

    #[test]
    fn invalid_values_map_to_zero_radius() {
        assert_eq!(prop_radius(f64::NAN), 0.0);
        assert_eq!(prop_radius(-125.0), 0.0);
        assert_eq!(prop_radius(f64::INFINITY), 0.0);
    }

    #[test]
    fn radius_is_monotone_in_value() {
        let values = [0.0, 1.0, 10.0, 5_000.0, 250_000.0, 400_000.0];
        for pair in values.windows(2) {
            assert!(prop_radius(pair[0]) <= prop_radius(pair[1]));
        }
    }

    #[test]
    fn area_scales_linearly_with_value() {
        // radius ∝ sqrt(value): quadrupling the value doubles the radius.
        let r = prop_radius(90_000.0);
        let r4 = prop_radius(360_000.0);
        assert!((r4 - 2.0 * r).abs() < 1e-9);
    }

    #[test]
    fn matches_reference_formula() {
        let value = 300_000.0;
        let expected = ((value * SCALE_FACTOR / 2.0) / PI).sqrt();
        assert_eq!(prop_radius(value), expected);
    }
}
