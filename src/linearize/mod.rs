//! Linearization curves for raw sensor signals
//!
//! Each supported sensor kind has a curve that remaps its physically
//! nonlinear response onto a uniform 0-1023 scale.

mod curve;
mod infrared;
mod potentiometer;

pub use curve::{Linearize, SensorKind, FULL_SCALE};
pub use infrared::InfraredCurve;
pub use potentiometer::PotentiometerCurve;
