//! note-sensor - analog sensor conditioning for note selection
//!
//! Turns noisy raw ADC readings from an instrument's sensors into stable,
//! discrete note states. Readings are linearized per sensor kind, averaged
//! over a short window and quantized; out-of-range readings mute the channel.

pub mod conditioning;
pub mod config;
pub mod engine;
pub mod error;
pub mod linearize;
pub mod sources;

pub use conditioning::ConditionedSensor;
pub use config::InstrumentConfig;
pub use engine::Instrument;
pub use error::{Error, Result};
pub use linearize::{Linearize, SensorKind};
pub use sources::AnalogSampler;
