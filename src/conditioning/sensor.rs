//! Conditioned sensor channel

use std::num::{NonZeroU16, NonZeroUsize};

use tracing::{debug, trace};

use super::Window;
use crate::linearize::{Linearize, SensorKind};
use crate::sources::AnalogSampler;

/// Size of the linear domain the window mean is quantized over
const QUANT_SPAN: u32 = 1024;

/// One physical sensor channel turned into a debounced discrete state
///
/// Every call to [`read`](Self::read) pulls one raw sample for the channel's
/// pin, linearizes it for the sensor kind, folds it into the averaging window
/// and quantizes the mean into `0..num_states`.
#[derive(Debug, Clone)]
pub struct ConditionedSensor {
    pin: u8,
    kind: SensorKind,
    window: Window,
    num_states: NonZeroU16,
    state: u16,
    changed: bool,
}

impl ConditionedSensor {
    /// Create a sensor channel with a zeroed window and state 0
    pub fn new(pin: u8, kind: SensorKind, window: NonZeroUsize, num_states: NonZeroU16) -> Self {
        Self {
            pin,
            kind,
            window: Window::new(window),
            num_states,
            state: 0,
            changed: false,
        }
    }

    /// Sample, smooth and quantize
    ///
    /// Returns `None` when the reading is out of the sensor's usable range
    /// (the mute zone of an IR sensor). That also empties the window so the
    /// next valid reading is not dragged by stale history; the stored state
    /// and change flag are left as they were.
    pub fn read<A: AnalogSampler + ?Sized>(&mut self, sampler: &mut A) -> Option<u16> {
        let raw = sampler.sample(self.pin);

        let Some(linear) = self.kind.linearize(raw) else {
            if !self.window.is_clear() {
                debug!(pin = self.pin, raw, "reading out of range, clearing window");
            }
            self.clear_buffer();
            return None;
        };

        self.window.push(linear);
        let state = self.quantize(self.window.mean());

        self.changed = state != self.state;
        if self.changed {
            trace!(pin = self.pin, from = self.state, to = state, "state changed");
        }
        self.state = state;

        Some(state)
    }

    /// Whether the last in-range read produced a different state than the one before
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Change the number of states used by subsequent reads
    ///
    /// The stored state is not rescaled.
    pub fn set_num_states(&mut self, num_states: NonZeroU16) {
        self.num_states = num_states;
    }

    /// Zero the averaging window
    ///
    /// State and change flag are only updated by the next read.
    pub fn clear_buffer(&mut self) {
        self.window.clear();
    }

    /// Most recently computed state
    pub fn state(&self) -> u16 {
        self.state
    }

    /// Number of discrete states
    pub fn num_states(&self) -> NonZeroU16 {
        self.num_states
    }

    /// Input pin sampled by this channel
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Sensor kind (selects the linearization curve)
    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Window length in samples
    pub fn window_len(&self) -> usize {
        self.window.capacity()
    }

    /// Current smoothed value on the 0-1023 scale
    pub fn mean(&self) -> u16 {
        self.window.mean()
    }

    #[cfg(test)]
    fn window_samples(&self) -> Vec<u16> {
        self.window.samples()
    }

    fn quantize(&self, mean: u16) -> u16 {
        // floor(mean / 1024 * n); mean <= 1023 keeps this below n
        let state = u32::from(mean) * u32::from(self.num_states.get()) / QUANT_SPAN;
        state as u16
    }
}
