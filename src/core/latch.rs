//! Level-Sensitive Latches.
//!
//! Latches have no clock history: their output responds to the input
//! levels present at each step. The SR latch rejects its forbidden input
//! instead of settling into an unspecified state.

use crate::common::error::{SimError, SimResult};

/// State of a 1-bit latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LatchState {
    /// Q = 0.
    #[default]
    Reset,
    /// Q = 1.
    Set,
}

impl LatchState {
    /// Returns the Q output as a boolean.
    pub fn q(self) -> bool {
        self == LatchState::Set
    }
}

/// Set-Reset latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct SrLatch {
    state: LatchState,
}

impl SrLatch {
    /// Creates an SR latch in the `Reset` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one set of input levels.
    ///
    /// | S | R | Result |
    /// |---|---|--------|
    /// | 1 | 0 | Set    |
    /// | 0 | 1 | Reset  |
    /// | 0 | 0 | Hold   |
    /// | 1 | 1 | error  |
    ///
    /// # Arguments
    ///
    /// * `s` - Set input level
    /// * `r` - Reset input level
    ///
    /// # Returns
    ///
    /// `InvalidState` for `S=1, R=1`; the stored state is left untouched.
    pub fn step(&mut self, s: bool, r: bool) -> SimResult<()> {
        self.state = match (s, r) {
            (true, false) => LatchState::Set,
            (false, true) => LatchState::Reset,
            (false, false) => self.state,
            (true, true) => {
                return Err(SimError::InvalidState(
                    "SR latch driven with S=1 and R=1".to_string(),
                ))
            }
        };
        Ok(())
    }

    /// Returns the current latch state.
    pub fn state(&self) -> LatchState {
        self.state
    }

    /// Returns Q.
    pub fn read(&self) -> bool {
        self.state.q()
    }

    /// Returns Q-bar.
    pub fn read_inverted(&self) -> bool {
        !self.state.q()
    }
}

/// Gated D latch: transparent while enabled, frozen otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct DLatch {
    value: bool,
}

impl DLatch {
    /// Creates a D latch holding 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one set of input levels.
    ///
    /// While `enable` is high the output follows `data`; while low the
    /// last passed value is held.
    pub fn step(&mut self, data: bool, enable: bool) {
        if enable {
            self.value = data;
        }
    }

    /// Returns Q.
    pub fn read(&self) -> bool {
        self.value
    }
}
