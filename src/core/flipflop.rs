//! Edge-Triggered Flip-Flops.
//!
//! `BitCell` is the D flip-flop every wider structure is built from. The
//! JK and T variants wrap a `BitCell` and differ only in the update function
//! applied when the cell's trigger edge is detected.

use crate::core::clock::{ClockLine, Trigger};

/// Single-bit edge-triggered storage cell (D flip-flop).
#[derive(Clone, Copy, Debug, Default)]
pub struct BitCell {
    value: bool,
    clock: ClockLine,
    trigger: Trigger,
}

impl BitCell {
    /// Creates a rising-edge cell holding 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cell holding 0 that fires on the given edge.
    pub fn with_trigger(trigger: Trigger) -> Self {
        Self {
            trigger,
            ..Self::default()
        }
    }

    /// Samples the clock and captures `data` if the trigger edge is seen.
    ///
    /// # Arguments
    ///
    /// * `data` - D input level
    /// * `clock_sample` - Clock level at this step
    pub fn step(&mut self, data: bool, clock_sample: bool) {
        self.clock_with(clock_sample, |_| data);
    }

    /// Samples the clock and, on the trigger edge, replaces the stored
    /// value with `update(current)`.
    ///
    /// # Returns
    ///
    /// `true` if the trigger edge fired on this sample.
    pub fn clock_with<F>(&mut self, clock_sample: bool, update: F) -> bool
    where
        F: FnOnce(bool) -> bool,
    {
        let edge = self.clock.sample(clock_sample);
        let fired = self.trigger.fires(edge);
        if fired {
            self.value = update(self.value);
        }
        fired
    }

    /// Returns Q.
    pub fn read(&self) -> bool {
        self.value
    }

    /// Asynchronous preset: forces Q=1 without touching the clock history.
    pub fn preset(&mut self) {
        self.value = true;
    }

    /// Asynchronous clear: forces Q=0 without touching the clock history.
    pub fn clear(&mut self) {
        self.value = false;
    }

    /// Asynchronously forces Q to `value`.
    pub fn force(&mut self, value: bool) {
        self.value = value;
    }

    /// Re-seats the clock history at `level` without firing.
    pub(crate) fn rest_clock(&mut self, level: bool) {
        self.clock = ClockLine::with_level(level);
    }

    /// Returns the edge this cell fires on.
    pub fn trigger(&self) -> Trigger {
        self.trigger
    }
}

/// Update applied by a JK flip-flop on its trigger edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JkAction {
    /// J=0, K=0.
    Hold,
    /// J=0, K=1.
    Reset,
    /// J=1, K=0.
    Set,
    /// J=1, K=1.
    Toggle,
}

impl JkAction {
    /// Maps J/K input levels to the characteristic-table action.
    pub fn from_inputs(j: bool, k: bool) -> Self {
        match (j, k) {
            (false, false) => JkAction::Hold,
            (false, true) => JkAction::Reset,
            (true, false) => JkAction::Set,
            (true, true) => JkAction::Toggle,
        }
    }

    /// Computes the next Q from the current Q.
    pub fn apply(self, q: bool) -> bool {
        match self {
            JkAction::Hold => q,
            JkAction::Reset => false,
            JkAction::Set => true,
            JkAction::Toggle => !q,
        }
    }
}

/// JK flip-flop.
#[derive(Clone, Copy, Debug, Default)]
pub struct JkFlipFlop {
    cell: BitCell,
}

impl JkFlipFlop {
    /// Creates a rising-edge JK flip-flop holding 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples the clock and applies the JK action on a rising edge.
    pub fn step(&mut self, j: bool, k: bool, clock_sample: bool) {
        let action = JkAction::from_inputs(j, k);
        self.cell.clock_with(clock_sample, |q| action.apply(q));
    }

    /// Returns Q.
    pub fn read(&self) -> bool {
        self.cell.read()
    }
}

/// Toggle flip-flop.
#[derive(Clone, Copy, Debug, Default)]
pub struct TFlipFlop {
    cell: BitCell,
}

impl TFlipFlop {
    /// Creates a rising-edge T flip-flop holding 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a T flip-flop holding 0 that fires on the given edge.
    pub fn with_trigger(trigger: Trigger) -> Self {
        Self {
            cell: BitCell::with_trigger(trigger),
        }
    }

    /// Samples the clock; on the trigger edge Q toggles iff `t` is high.
    pub fn step(&mut self, t: bool, clock_sample: bool) {
        self.cell.clock_with(clock_sample, |q| q ^ t);
    }

    /// Returns Q.
    pub fn read(&self) -> bool {
        self.cell.read()
    }

    /// Asynchronously forces Q to `value`.
    pub fn force(&mut self, value: bool) {
        self.cell.force(value);
    }
}
