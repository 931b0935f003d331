//! Linearize trait and sensor kind dispatch

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{InfraredCurve, PotentiometerCurve};

/// Top of the linear output domain (and of a 10-bit ADC reading)
pub const FULL_SCALE: u16 = 1023;

/// Trait for linearization curves
pub trait Linearize {
    /// Map a raw sample to the 0-1023 domain
    ///
    /// Returns `None` when the reading is outside the sensor's usable range.
    fn linearize(&self, raw: u16) -> Option<u16>;
}

/// Kind of physical sensor wired to a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    /// Rotary potentiometer with a log-ish taper
    #[serde(alias = "pot")]
    Potentiometer,
    /// Infrared distance sensor (output roughly inverse to distance)
    #[serde(alias = "ir")]
    InfraredDistance,
}

impl SensorKind {
    /// All supported kinds
    pub const ALL: [SensorKind; 2] = [SensorKind::Potentiometer, SensorKind::InfraredDistance];

    /// Get kind by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "potentiometer" | "pot" => Some(Self::Potentiometer),
            "infrared_distance" | "infrared" | "ir" => Some(Self::InfraredDistance),
            _ => None,
        }
    }

    /// Canonical name, as used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Potentiometer => "potentiometer",
            Self::InfraredDistance => "infrared_distance",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Linearize for SensorKind {
    fn linearize(&self, raw: u16) -> Option<u16> {
        match self {
            Self::Potentiometer => PotentiometerCurve::STANDARD.linearize(raw),
            Self::InfraredDistance => InfraredCurve::STANDARD.linearize(raw),
        }
    }
}
