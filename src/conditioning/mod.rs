//! Conditioning of linearized samples into debounced note states
//!
//! A sliding window averages the last few samples, and the average is
//! quantized into one of a fixed number of states.

mod sensor;
mod window;

pub use sensor::ConditionedSensor;
pub(crate) use window::Window;
