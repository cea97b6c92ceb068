//! Clock Line and Edge Detection.
//!
//! Every edge-triggered element owns a `ClockLine` and feeds it one sample
//! per step. The line remembers the previous sample, so edge history is
//! per instance and two elements driven interleaved never interfere.

/// Transition observed between two successive clock samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Low to high transition.
    Rising,
    /// High to low transition.
    Falling,
    /// No transition (the line held its level).
    None,
}

impl EdgeKind {
    /// Returns `true` for a rising edge.
    pub fn is_rising(self) -> bool {
        self == EdgeKind::Rising
    }

    /// Returns `true` for a falling edge.
    pub fn is_falling(self) -> bool {
        self == EdgeKind::Falling
    }
}

/// Which transition fires an edge-triggered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Trigger {
    /// Positive-edge triggered (the common case).
    #[default]
    RisingEdge,
    /// Negative-edge triggered.
    FallingEdge,
}

impl Trigger {
    /// Checks whether `edge` fires an element with this trigger.
    pub fn fires(self, edge: EdgeKind) -> bool {
        match self {
            Trigger::RisingEdge => edge == EdgeKind::Rising,
            Trigger::FallingEdge => edge == EdgeKind::Falling,
        }
    }
}

/// A sampled clock line with one sample of history.
///
/// Both fields start low. `sample` is the only mutator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockLine {
    current: bool,
    previous: bool,
}

impl ClockLine {
    /// Creates a clock line with both the current and previous level low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock line that has been resting at `level`.
    ///
    /// Used when an element's clock input is driven by another element's
    /// output and that output was forced asynchronously.
    pub fn with_level(level: bool) -> Self {
        Self {
            current: level,
            previous: level,
        }
    }

    /// Feeds a new sample into the line and classifies the transition.
    ///
    /// The transition is computed against the sample supplied by the
    /// previous call. History is shifted unconditionally, whatever the
    /// edge kind.
    ///
    /// # Arguments
    ///
    /// * `new_value` - The clock level observed at this step
    ///
    /// # Returns
    ///
    /// `Rising` for low to high, `Falling` for high to low, `None` otherwise.
    pub fn sample(&mut self, new_value: bool) -> EdgeKind {
        self.previous = self.current;
        self.current = new_value;
        match (self.previous, self.current) {
            (false, true) => EdgeKind::Rising,
            (true, false) => EdgeKind::Falling,
            _ => EdgeKind::None,
        }
    }

    /// Returns the most recent sample.
    pub fn level(&self) -> bool {
        self.current
    }

    /// Returns the sample before the most recent one.
    pub fn previous(&self) -> bool {
        self.previous
    }
}
