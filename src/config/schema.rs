//! Configuration schema definitions

use std::collections::HashSet;
use std::num::{NonZeroU16, NonZeroUsize};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::linearize::SensorKind;

/// Example configuration written by `note-sensor init`
pub const EXAMPLE_CONFIG: &str = include_str!("../../note-sensor.example.yaml");

/// Longest averaging window accepted
pub const MAX_WINDOW: usize = 256;

/// Most states a channel may be split into (one per linear step)
pub const MAX_STATES: u16 = 1024;

/// Main configuration: the instrument's sensor channels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentConfig {
    /// Control-loop rate in Hz, used when replaying captures (default: 100)
    #[serde(default = "default_loop_hz")]
    pub loop_hz: u32,

    /// Sensor channels, polled in this order
    #[serde(default)]
    pub channels: Vec<ChannelConfig>,
}

fn default_loop_hz() -> u32 { 100 }

impl InstrumentConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.loop_hz == 0 || self.loop_hz > 10_000 {
            return Err(invalid("loop_hz must be between 1 and 10000"));
        }
        if self.channels.is_empty() {
            return Err(invalid("at least one channel is required"));
        }

        let mut names = HashSet::new();
        let mut pins = HashSet::new();
        for channel in &self.channels {
            channel.validate()?;
            if !names.insert(channel.name.as_str()) {
                return Err(invalid(format!("duplicate channel name '{}'", channel.name)));
            }
            if !pins.insert(channel.pin) {
                return Err(invalid(format!(
                    "channel '{}' reuses pin {}",
                    channel.name, channel.pin
                )));
            }
        }

        Ok(())
    }
}

/// One sensor channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Unique name for this channel
    pub name: String,

    /// ADC input pin
    pub pin: u8,

    /// Sensor type
    pub kind: SensorKind,

    /// Averaging window length in samples (default: 8)
    #[serde(default = "default_window")]
    pub window: NonZeroUsize,

    /// Number of discrete states (default: 12, one octave)
    #[serde(default = "default_states")]
    pub states: NonZeroU16,
}

const DEFAULT_WINDOW: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};
const DEFAULT_STATES: NonZeroU16 = match NonZeroU16::new(12) {
    Some(n) => n,
    None => unreachable!(),
};

fn default_window() -> NonZeroUsize { DEFAULT_WINDOW }
fn default_states() -> NonZeroU16 { DEFAULT_STATES }

impl ChannelConfig {
    /// Create a channel with default window and state count
    pub fn new(name: impl Into<String>, pin: u8, kind: SensorKind) -> Self {
        Self {
            name: name.into(),
            pin,
            kind,
            window: default_window(),
            states: default_states(),
        }
    }

    /// Set the window length
    pub fn with_window(mut self, window: NonZeroUsize) -> Self {
        self.window = window;
        self
    }

    /// Set the number of states
    pub fn with_states(mut self, states: NonZeroU16) -> Self {
        self.states = states;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("channel name must not be empty"));
        }
        if self.window.get() > MAX_WINDOW {
            return Err(invalid(format!(
                "channel '{}': window must be at most {}",
                self.name, MAX_WINDOW
            )));
        }
        if self.states.get() > MAX_STATES {
            return Err(invalid(format!(
                "channel '{}': states must be at most {}",
                self.name, MAX_STATES
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidConfig(msg.into())
}
