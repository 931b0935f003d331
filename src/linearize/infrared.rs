//! Infrared distance curve
//!
//! IR rangers report roughly the inverse of distance. Taking `1023 / raw`
//! recovers a distance-like value, which is then clipped to the playable band
//! and inverted so that a hand moving towards the sensor raises the output.
//! Readings past the cutoff are the "no note" zone.

use super::{Linearize, FULL_SCALE};

/// Clamped, inverted linear remap of an inverse-distance signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfraredCurve {
    cutoff: f64,
    span_min: f64,
    span_max: f64,
}

impl InfraredCurve {
    /// Band used on the instrument
    ///
    /// `span_min` and `span_max` set how far apart the highest and lowest
    /// notes are physically.
    pub const STANDARD: Self = Self {
        cutoff: 14.0,
        span_min: 2.0,
        span_max: 9.0,
    };

    /// Create a curve
    ///
    /// Returns `None` unless `0 < span_min < span_max <= cutoff`.
    pub fn new(cutoff: f64, span_min: f64, span_max: f64) -> Option<Self> {
        let valid = 0.0 < span_min && span_min < span_max && span_max <= cutoff;
        valid.then_some(Self {
            cutoff,
            span_min,
            span_max,
        })
    }

    /// Distance-like value for a raw reading, `None` when raw is zero
    pub fn distance(&self, raw: u16) -> Option<f64> {
        if raw == 0 {
            return None;
        }
        Some(f64::from(FULL_SCALE) / f64::from(raw))
    }
}

impl Linearize for InfraredCurve {
    fn linearize(&self, raw: u16) -> Option<u16> {
        let xd = self.distance(raw)?;
        if xd > self.cutoff {
            return None;
        }

        let xd = xd.clamp(self.span_min, self.span_max);
        let normalized = 1.0 - (xd - self.span_min) / (self.span_max - self.span_min);

        Some((normalized * f64::from(FULL_SCALE)).round() as u16)
    }
}
