//! Fixed-capacity averaging window

use std::num::NonZeroUsize;

/// Ring buffer of the most recent linearized samples
///
/// Always holds exactly `capacity` slots; unused slots read as zero. A
/// running sum keeps the mean O(1) per sample.
#[derive(Debug, Clone)]
pub struct Window {
    samples: Box<[u16]>,
    write_pos: usize,
    sum: u64,
}

impl Window {
    /// Create a zero-filled window
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            samples: vec![0; capacity.get()].into_boxed_slice(),
            write_pos: 0,
            sum: 0,
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Push a new sample, discarding the oldest
    pub fn push(&mut self, sample: u16) {
        let oldest = std::mem::replace(&mut self.samples[self.write_pos], sample);
        self.sum = self.sum - u64::from(oldest) + u64::from(sample);
        self.write_pos = (self.write_pos + 1) % self.samples.len();
    }

    /// Truncating mean over every slot
    pub fn mean(&self) -> u16 {
        // mean of u16 values fits in u16
        (self.sum / self.samples.len() as u64) as u16
    }

    /// Check if every slot is zero
    pub fn is_clear(&self) -> bool {
        self.sum == 0
    }

    /// Zero every slot
    pub fn clear(&mut self) {
        self.samples.fill(0);
        self.write_pos = 0;
        self.sum = 0;
    }

    /// All samples in order (oldest to newest)
    #[cfg(test)]
    pub fn samples(&self) -> Vec<u16> {
        let capacity = self.samples.len();
        (0..capacity)
            .map(|i| self.samples[(self.write_pos + i) % capacity])
            .collect()
    }
}
