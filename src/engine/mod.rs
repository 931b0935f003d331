//! Control-loop engine
//!
//! Holds one conditioned sensor per configured channel and polls them all
//! once per cycle.

mod instrument;

pub use instrument::{ChannelReading, Instrument};
