//! Replay of recorded ADC readings

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::AnalogSampler;
use crate::error::Result;

/// Recorded raw readings, per pin
///
/// ```yaml
/// pins:
///   0: [80, 120, 300, 512]
///   1: [0, 40, 900]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Capture {
    #[serde(default)]
    pub pins: BTreeMap<u8, Vec<u16>>,
}

impl Capture {
    /// Load a capture from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let capture: Capture = crate::config::read_yaml(path)?;
        info!(path = %path.display(), pins = capture.pins.len(), "loaded capture");
        Ok(capture)
    }

    /// Add a pin's readings (builder pattern)
    pub fn with_pin(mut self, pin: u8, readings: Vec<u16>) -> Self {
        self.pins.insert(pin, readings);
        self
    }

    /// Length of the longest recorded sequence
    pub fn len(&self) -> usize {
        self.pins.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sampler that plays a [`Capture`] back one reading per call
///
/// Each pin advances independently. Once a pin's readings run out its last
/// value is held; pins with no readings sample as 0.
#[derive(Debug, Clone)]
pub struct ReplaySampler {
    capture: Capture,
    cursors: BTreeMap<u8, usize>,
}

impl ReplaySampler {
    /// Create a sampler positioned at the start of the capture
    pub fn new(capture: Capture) -> Self {
        Self {
            capture,
            cursors: BTreeMap::new(),
        }
    }

    /// Number of cycles needed to play every pin to the end
    pub fn cycles(&self) -> usize {
        self.capture.len()
    }
}

impl AnalogSampler for ReplaySampler {
    fn sample(&mut self, pin: u8) -> u16 {
        let Some(readings) = self.capture.pins.get(&pin) else {
            return 0;
        };
        let cursor = self.cursors.entry(pin).or_insert(0);
        let value = readings
            .get(*cursor)
            .or_else(|| readings.last())
            .copied()
            .unwrap_or(0);
        *cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_replay_in_order_then_hold() {
        let capture = Capture::default().with_pin(0, vec![10, 20, 30]);
        let mut sampler = ReplaySampler::new(capture);

        let readings: Vec<_> = (0..5).map(|_| sampler.sample(0)).collect();
        assert_eq!(readings, vec![10, 20, 30, 30, 30]);
    }

    #[test]
    fn test_replay_pins_are_independent() {
        let capture = Capture::default()
            .with_pin(0, vec![1, 2, 3])
            .with_pin(4, vec![100, 200]);
        let mut sampler = ReplaySampler::new(capture);

        assert_eq!(sampler.sample(0), 1);
        assert_eq!(sampler.sample(4), 100);
        assert_eq!(sampler.sample(0), 2);
        assert_eq!(sampler.sample(0), 3);
        assert_eq!(sampler.sample(4), 200);
        assert_eq!(sampler.cycles(), 3);
    }

    #[test]
    fn test_replay_unknown_or_empty_pin_reads_zero() {
        let capture = Capture::default().with_pin(1, vec![]);
        let mut sampler = ReplaySampler::new(capture);
        assert_eq!(sampler.sample(1), 0);
        assert_eq!(sampler.sample(9), 0);
        assert_eq!(sampler.cycles(), 0);
    }

    #[test]
    fn test_load_capture() {
        let yaml = r#"
pins:
  0: [80, 120, 300]
  2: [512]
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let capture = Capture::load(file.path()).unwrap();
        assert_eq!(capture.pins.get(&0), Some(&vec![80, 120, 300]));
        assert_eq!(capture.pins.get(&2), Some(&vec![512]));
        assert_eq!(capture.len(), 3);
        assert!(!capture.is_empty());
    }

    #[test]
    fn test_load_capture_missing_file() {
        let err = Capture::load(Path::new("/nonexistent/capture.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
