//! Instrument: the set of conditioned sensor channels

use std::num::NonZeroU16;

use serde::Serialize;
use tracing::info;

use crate::conditioning::ConditionedSensor;
use crate::config::InstrumentConfig;
use crate::sources::AnalogSampler;

/// Result of polling one channel for one cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelReading {
    /// Channel name
    pub name: String,
    /// Pin the reading came from
    pub pin: u8,
    /// Quantized state, `None` when the sensor was out of range (mute)
    pub state: Option<u16>,
    /// Whether the state differs from the channel's previous state
    pub changed: bool,
}

/// A named set of sensor channels polled together
#[derive(Debug, Clone, Default)]
pub struct Instrument {
    channels: Vec<(String, ConditionedSensor)>,
}

impl Instrument {
    /// Create an instrument with no channels
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every channel described by a (validated) configuration
    pub fn from_config(config: &InstrumentConfig) -> Self {
        let mut instrument = Self::new();
        for channel in &config.channels {
            instrument.add_channel(
                channel.name.clone(),
                ConditionedSensor::new(channel.pin, channel.kind, channel.window, channel.states),
            );
        }
        info!(channels = instrument.len(), "instrument ready");
        instrument
    }

    /// Add a channel (polled after the existing ones)
    pub fn add_channel(&mut self, name: impl Into<String>, sensor: ConditionedSensor) {
        self.channels.push((name.into(), sensor));
    }

    /// Read every channel once, in order
    pub fn poll<A: AnalogSampler + ?Sized>(&mut self, sampler: &mut A) -> Vec<ChannelReading> {
        self.channels
            .iter_mut()
            .map(|(name, sensor)| {
                let state = sensor.read(&mut *sampler);
                ChannelReading {
                    name: name.clone(),
                    pin: sensor.pin(),
                    state,
                    changed: state.is_some() && sensor.has_changed(),
                }
            })
            .collect()
    }

    /// Look up a channel by name
    pub fn channel(&self, name: &str) -> Option<&ConditionedSensor> {
        self.channels
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, sensor)| sensor)
    }

    /// Look up a channel by name for modification
    pub fn channel_mut(&mut self, name: &str) -> Option<&mut ConditionedSensor> {
        self.channels
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, sensor)| sensor)
    }

    /// Change one channel's state count; `false` if there is no such channel
    pub fn set_num_states(&mut self, name: &str, num_states: NonZeroU16) -> bool {
        match self.channel_mut(name) {
            Some(sensor) => {
                sensor.set_num_states(num_states);
                true
            }
            None => false,
        }
    }

    /// Zero every channel's window
    pub fn clear_all(&mut self) {
        for (_, sensor) in &mut self.channels {
            sensor.clear_buffer();
        }
    }

    /// Channel names in polling order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|(name, _)| name.as_str())
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Check if there are no channels
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChannelConfig;
    use crate::linearize::SensorKind;
    use crate::sources::{Capture, ReplaySampler};
    use std::num::NonZeroUsize;

    fn two_channel_config() -> InstrumentConfig {
        InstrumentConfig {
            loop_hz: 100,
            channels: vec![
                ChannelConfig::new("pitch", 0, SensorKind::InfraredDistance)
                    .with_window(NonZeroUsize::new(1).unwrap())
                    .with_states(NonZeroU16::new(8).unwrap()),
                ChannelConfig::new("octave", 1, SensorKind::Potentiometer)
                    .with_window(NonZeroUsize::new(1).unwrap())
                    .with_states(NonZeroU16::new(4).unwrap()),
            ],
        }
    }

    #[test]
    fn test_from_config() {
        let instrument = Instrument::from_config(&two_channel_config());
        assert_eq!(instrument.len(), 2);
        assert_eq!(instrument.names().collect::<Vec<_>>(), vec!["pitch", "octave"]);
        assert_eq!(instrument.channel("octave").unwrap().pin(), 1);
        assert!(instrument.channel("volume").is_none());
    }

    #[test]
    fn test_poll_reads_each_channel() {
        let mut instrument = Instrument::from_config(&two_channel_config());
        let capture = Capture::default()
            .with_pin(0, vec![512, 40])
            .with_pin(1, vec![1023, 1023]);
        let mut sampler = ReplaySampler::new(capture);

        let first = instrument.poll(&mut sampler);
        assert_eq!(
            first,
            vec![
                ChannelReading { name: "pitch".into(), pin: 0, state: Some(7), changed: true },
                ChannelReading { name: "octave".into(), pin: 1, state: Some(3), changed: true },
            ]
        );

        let second = instrument.poll(&mut sampler);
        // pitch hand moved out of range: muted, not a change
        assert_eq!(second[0].state, None);
        assert!(!second[0].changed);
        assert_eq!(second[1].state, Some(3));
        assert!(!second[1].changed);
    }

    #[test]
    fn test_set_num_states_by_name() {
        let mut instrument = Instrument::from_config(&two_channel_config());
        assert!(instrument.set_num_states("octave", NonZeroU16::new(2).unwrap()));
        assert!(!instrument.set_num_states("missing", NonZeroU16::new(2).unwrap()));

        let mut adc = |_pin: u8| 1023u16;
        let readings = instrument.poll(&mut adc);
        assert_eq!(readings[1].state, Some(1));
    }

    #[test]
    fn test_clear_all() {
        let mut instrument = Instrument::from_config(&two_channel_config());
        let mut adc = |_pin: u8| 1023u16;
        instrument.poll(&mut adc);

        instrument.clear_all();
        assert_eq!(instrument.channel("pitch").unwrap().mean(), 0);
        assert_eq!(instrument.channel("octave").unwrap().mean(), 0);
    }

    #[test]
    fn test_manual_channels() {
        let mut instrument = Instrument::new();
        assert!(instrument.is_empty());
        instrument.add_channel(
            "knob",
            ConditionedSensor::new(
                2,
                SensorKind::Potentiometer,
                NonZeroUsize::new(2).unwrap(),
                NonZeroU16::new(2).unwrap(),
            ),
        );

        let mut adc = |_pin: u8| 1023u16;
        // means 511 then 1023
        assert_eq!(instrument.poll(&mut adc)[0].state, Some(0));
        assert_eq!(instrument.poll(&mut adc)[0].state, Some(1));
    }
}
