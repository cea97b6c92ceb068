//! Square-Wave Clock Generator.
//!
//! Produces the alternating sample stream that drives a simulation. One
//! full cycle is two samples: the start level followed by its inverse.

/// Free-running square-wave source.
#[derive(Clone, Copy, Debug)]
pub struct ClockGenerator {
    level: bool,
    half_cycles: u64,
}

impl ClockGenerator {
    /// Creates a generator whose first sample is `start_level`.
    pub fn new(start_level: bool) -> Self {
        Self {
            level: start_level,
            half_cycles: 0,
        }
    }

    /// Returns the next sample and flips the line.
    pub fn next_sample(&mut self) -> bool {
        let sample = self.level;
        self.level = !self.level;
        self.half_cycles += 1;
        sample
    }

    /// Number of samples produced so far.
    pub fn half_cycles(&self) -> u64 {
        self.half_cycles
    }

    /// Number of complete cycles produced so far.
    pub fn cycles(&self) -> u64 {
        self.half_cycles / 2
    }
}

impl Default for ClockGenerator {
    /// Creates a generator starting low, so the second sample is a rising edge.
    fn default() -> Self {
        Self::new(false)
    }
}
