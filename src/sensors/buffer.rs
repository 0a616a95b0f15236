use std::collections::VecDeque;

use super::SensorSample;

/// Live view keeps the most recent 20 samples.
pub const LIVE_CAPACITY: usize = 20;

/// Rolling buffer of live samples. Pushing past capacity evicts the oldest
/// sample first.
pub struct SampleBuffer {
    samples: VecDeque<SensorSample>,
    capacity: usize,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(LIVE_CAPACITY),
            capacity: LIVE_CAPACITY,
        }
    }

    pub fn push(&mut self, sample: SensorSample) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&SensorSample> {
        self.samples.back()
    }

    /// Cloned oldest-to-newest view for rendering.
    pub fn snapshot(&self) -> Vec<SensorSample> {
        self.samples.iter().cloned().collect()
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
