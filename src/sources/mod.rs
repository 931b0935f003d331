//! Sample sources
//!
//! The platform supplies raw ADC readings through [`AnalogSampler`]. A replay
//! sampler plays back recorded readings for offline runs.

mod replay;
mod sampler;

pub use replay::{Capture, ReplaySampler};
pub use sampler::AnalogSampler;
