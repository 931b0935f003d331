//! Potentiometer curve
//!
//! The pots used on the instrument have a strongly bent taper: about half of
//! the electrical range is covered in the first sixth of the raw readings.
//! Two straight segments meeting at a knee flatten that out.

use super::{Linearize, FULL_SCALE};

/// Two-segment piecewise-linear remap through a knee point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotentiometerCurve {
    knee_raw: u16,
    knee_linear: u16,
}

impl PotentiometerCurve {
    /// Knee measured on the instrument's pots: raw 148 is the physical midpoint
    pub const STANDARD: Self = Self::new(148, 512);

    /// Create a curve bending at `(knee_raw, knee_linear)`
    ///
    /// Both coordinates must lie strictly inside `1..FULL_SCALE`.
    pub const fn new(knee_raw: u16, knee_linear: u16) -> Self {
        assert!(knee_raw > 0 && knee_raw < FULL_SCALE);
        assert!(knee_linear > 0 && knee_linear < FULL_SCALE);
        Self {
            knee_raw,
            knee_linear,
        }
    }
}

impl Linearize for PotentiometerCurve {
    fn linearize(&self, raw: u16) -> Option<u16> {
        let x = u32::from(raw.min(FULL_SCALE));
        let x0 = u32::from(self.knee_raw);
        let y0 = u32::from(self.knee_linear);
        let top = u32::from(FULL_SCALE);

        let y = if x < x0 {
            // through the origin
            x * y0 / x0
        } else {
            // through the knee and (1023, 1023)
            y0 + (x - x0) * (top - y0) / (top - x0)
        };

        // y <= 1023 on both segments
        Some(y as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pot(raw: u16) -> u16 {
        PotentiometerCurve::STANDARD.linearize(raw).unwrap()
    }

    #[test]
    fn test_pot_endpoints() {
        assert_eq!(pot(0), 0);
        assert_eq!(pot(1023), 1023);
    }

    #[test]
    fn test_pot_knee() {
        assert_eq!(pot(148), 512);
        // last point of the first segment sits just under the knee
        assert_eq!(pot(147), 508);
    }

    #[test]
    fn test_pot_segments() {
        // 74 * 512 / 148
        assert_eq!(pot(74), 256);
        // 512 + 352 * 511 / 875
        assert_eq!(pot(500), 717);
    }

    #[test]
    fn test_pot_never_out_of_range() {
        for raw in 0..=1023 {
            let y = PotentiometerCurve::STANDARD.linearize(raw);
            assert!(matches!(y, Some(v) if v <= 1023), "raw {} gave {:?}", raw, y);
        }
    }

    #[test]
    fn test_pot_continuous_at_knee() {
        // Both segment formulas meet exactly at the knee
        let (x0, y0, top) = (148u32, 512u32, 1023u32);
        let x = 148u32;
        assert_eq!(x * y0 / x0, 512);
        assert_eq!(y0 + (x - x0) * (top - y0) / (top - x0), 512);
        assert_eq!(pot(148), 512);

        let below = pot(147);
        let at = pot(148);
        let above = pot(149);

        // Largest step either side of the knee is bounded by the steeper slope
        let slope: f64 = 512.0 / 148.0;
        assert!(f64::from(at - below) <= slope.ceil());
        assert!(f64::from(above - at) <= slope.ceil());
    }

    #[test]
    fn test_pot_monotonic() {
        let mut last = 0;
        for raw in 0..=1023 {
            let y = pot(raw);
            assert!(y >= last, "curve dropped at raw {}", raw);
            last = y;
        }
    }

    #[test]
    fn test_pot_clamps_wide_adc() {
        // A 12-bit reading saturates at the top of the domain
        assert_eq!(pot(4095), 1023);
    }

    #[test]
    fn test_custom_knee() {
        let curve = PotentiometerCurve::new(512, 512);
        assert_eq!(curve.knee_raw, 512);
        assert_eq!(curve.knee_linear, 512);
        assert_eq!(curve.linearize(256), Some(256));
        assert_eq!(curve.linearize(700), Some(700));
    }
}
