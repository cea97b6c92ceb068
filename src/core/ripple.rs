//! Asynchronous (Ripple) Counters.
//!
//! A ripple counter is a chain of toggle cells where only stage 0 sees the
//! external clock; stage `i+1` is clocked by the output of stage `i`. The
//! bits therefore do not all change on the same simulated step. The ripple
//! is exposed as an explicit settle process: `clock` toggles stage 0 and
//! leaves the carry in flight, and each `propagate` call moves it one
//! stage further. Intermediate (glitch) values are observable via `read`.
//!
//! Propagation delay in real time is not modeled, only the order in which
//! stages change.

use crate::common::bits;
use crate::common::error::{SimError, SimResult};
use crate::core::clock::Trigger;
use crate::core::counter::{check_counter, CountDirection};
use crate::core::flipflop::BitCell;
use crate::core::traits::Sequential;

/// Progress of an in-flight ripple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ripple {
    /// All stages are stable.
    Settled,
    /// Stage `n` is next to sample its (changed) clock input.
    Stage(usize),
    /// The count reached the modulus and the asynchronous reset is pending.
    Reset,
}

/// Ripple counter built from toggle cells.
#[derive(Clone, Debug)]
pub struct RippleCounter {
    stages: Vec<BitCell>,
    modulus: Option<u64>,
    direction: CountDirection,
    ripple: Ripple,
}

impl RippleCounter {
    /// Creates a ripple counter at 0.
    ///
    /// For `Up` counting stages 1.. fire on the falling edge of the previous
    /// stage; for `Down` they fire on its rising edge. Stage 0 always fires
    /// on the rising edge of the external clock.
    ///
    /// # Arguments
    ///
    /// * `width` - Number of stages (1 to 64)
    /// * `modulus` - Exclusive bound enforced by asynchronous reset
    /// * `direction` - Counting direction, fixed by the stage wiring
    pub fn new(width: usize, modulus: Option<u64>, direction: CountDirection) -> SimResult<Self> {
        check_counter(width, modulus)?;
        let chained = match direction {
            CountDirection::Up => Trigger::FallingEdge,
            CountDirection::Down => Trigger::RisingEdge,
        };
        let stages = (0..width)
            .map(|i| {
                if i == 0 {
                    BitCell::with_trigger(Trigger::RisingEdge)
                } else {
                    BitCell::with_trigger(chained)
                }
            })
            .collect();
        Ok(Self {
            stages,
            modulus,
            direction,
            ripple: Ripple::Settled,
        })
    }

    /// Drives the external clock into stage 0.
    ///
    /// Any ripple still in flight from the previous edge is settled first.
    /// On a rising edge stage 0 toggles and the carry is left pending at
    /// stage 1; call `propagate` or `settle` to move it along.
    pub fn clock(&mut self, clock_sample: bool) {
        self.settle();
        if self.stages[0].clock_with(clock_sample, |q| !q) {
            self.ripple = self.after_stage(0);
        }
    }

    /// Advances an in-flight ripple by one stage.
    ///
    /// # Returns
    ///
    /// `true` if a stage was sampled or the reset applied, `false` when
    /// the counter was already settled.
    pub fn propagate(&mut self) -> bool {
        match self.ripple {
            Ripple::Settled => false,
            Ripple::Stage(i) => {
                let driver = self.stages[i - 1].read();
                self.ripple = if self.stages[i].clock_with(driver, |q| !q) {
                    self.after_stage(i)
                } else {
                    self.after_ripple()
                };
                true
            }
            Ripple::Reset => {
                let target = match self.direction {
                    CountDirection::Up => 0,
                    CountDirection::Down => self.modulus.map_or(0, |m| m - 1),
                };
                self.force(target);
                self.ripple = Ripple::Settled;
                true
            }
        }
    }

    /// Propagates until every stage is stable.
    ///
    /// # Returns
    ///
    /// The number of propagation steps taken.
    pub fn settle(&mut self) -> usize {
        let mut steps = 0;
        while self.propagate() {
            steps += 1;
        }
        steps
    }

    /// Drives the clock and settles the resulting ripple.
    ///
    /// # Returns
    ///
    /// The number of propagation steps the edge needed.
    pub fn tick(&mut self, clock_sample: bool) -> usize {
        self.clock(clock_sample);
        self.settle()
    }

    /// Next ripple step after stage `i` toggled.
    fn after_stage(&self, i: usize) -> Ripple {
        if i + 1 < self.stages.len() {
            Ripple::Stage(i + 1)
        } else {
            self.after_ripple()
        }
    }

    /// Ripple step once the carry has stopped moving.
    fn after_ripple(&self) -> Ripple {
        match self.modulus {
            Some(m) if self.read() >= m => Ripple::Reset,
            _ => Ripple::Settled,
        }
    }

    /// Asynchronously forces every stage and re-seats the chained clocks.
    fn force(&mut self, value: u64) {
        for (i, stage) in self.stages.iter_mut().enumerate() {
            stage.force(bits::bit(value, i));
        }
        for i in 1..self.stages.len() {
            let driver = self.stages[i - 1].read();
            self.stages[i].rest_clock(driver);
        }
    }

    /// Returns the stage outputs as a word, LSB first.
    ///
    /// While a ripple is in flight this is the transient value.
    pub fn read(&self) -> u64 {
        bits::pack(self.stages.iter().map(BitCell::read))
    }

    /// Checks whether no ripple is in flight.
    pub fn is_settled(&self) -> bool {
        self.ripple == Ripple::Settled
    }

    /// Returns the number of stages.
    pub fn width(&self) -> usize {
        self.stages.len()
    }

    /// Returns the explicit modulus, if any.
    pub fn modulus(&self) -> Option<u64> {
        self.modulus
    }

    /// Returns the counting direction.
    pub fn direction(&self) -> CountDirection {
        self.direction
    }

    /// Asynchronously loads `value` into the stages and drops any in-flight
    /// ripple.
    ///
    /// # Returns
    ///
    /// `InvalidState` if `value` does not fit the width or is not below
    /// the modulus; the stages are left untouched.
    pub fn preset(&mut self, value: u64) -> SimResult<()> {
        let limit = self.modulus.map_or(bits::mask(self.width()), |m| m - 1);
        if value > limit {
            return Err(SimError::InvalidState(format!(
                "preset {} outside counter range 0..={}",
                value, limit
            )));
        }
        self.force(value);
        self.ripple = Ripple::Settled;
        Ok(())
    }

    /// Asynchronously clears every stage and drops any in-flight ripple.
    pub fn reset(&mut self) {
        self.force(0);
        self.ripple = Ripple::Settled;
    }
}

impl Sequential for RippleCounter {
    fn kind(&self) -> &'static str {
        "ripple_counter"
    }

    fn width(&self) -> usize {
        self.stages.len()
    }

    fn peek(&self) -> u64 {
        self.read()
    }

    /// Drives the clock and reports how far the ripple travelled.
    fn clock(&mut self, clock_sample: bool) -> usize {
        self.tick(clock_sample)
    }

    fn reset(&mut self) {
        RippleCounter::reset(self);
    }
}
