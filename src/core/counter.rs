//! Synchronous Counters.
//!
//! A synchronous counter updates every bit on the same detected clock
//! edge. The count wraps either at an explicit modulus or at the storage
//! width. See `core::ripple` for the asynchronous variant.

use crate::common::bits::{self, check_width, mask};
use crate::common::error::{SimError, SimResult};
use crate::core::clock::ClockLine;
use crate::core::traits::Sequential;
use serde::Deserialize;

/// Counting direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountDirection {
    /// Increment on each edge.
    #[default]
    Up,
    /// Decrement on each edge.
    Down,
}

/// Checks a `(width, modulus)` pair shared by synchronous and ripple counters.
pub(crate) fn check_counter(width: usize, modulus: Option<u64>) -> SimResult<()> {
    check_width(width, "counter")?;
    if let Some(m) = modulus {
        if m == 0 {
            return Err(SimError::InvalidConfiguration(
                "counter modulus must be non-zero".to_string(),
            ));
        }
        if width < bits::MAX_WIDTH && m > (1u64 << width) {
            return Err(SimError::InvalidConfiguration(format!(
                "modulus {} does not fit a {}-bit counter",
                m, width
            )));
        }
    }
    Ok(())
}

/// Synchronous binary counter with optional modulus.
#[derive(Clone, Debug)]
pub struct Counter {
    count: u64,
    width: usize,
    modulus: Option<u64>,
    direction: CountDirection,
    clock: ClockLine,
}

impl Counter {
    /// Creates an up-counter at 0.
    ///
    /// # Arguments
    ///
    /// * `width` - Storage width in bits (1 to 64)
    /// * `modulus` - Exclusive upper bound; `None` wraps at `2^width`
    ///
    /// # Returns
    ///
    /// `InvalidConfiguration` for a zero modulus, a modulus above `2^width`,
    /// or an invalid width.
    pub fn new(width: usize, modulus: Option<u64>) -> SimResult<Self> {
        check_counter(width, modulus)?;
        Ok(Self::unchecked(width, modulus))
    }

    /// Creates a 4-bit decade (BCD) counter.
    pub fn bcd() -> Self {
        Self::unchecked(4, Some(10))
    }

    /// Builds an up-counter at 0 from an already validated `(width, modulus)`.
    fn unchecked(width: usize, modulus: Option<u64>) -> Self {
        Self {
            count: 0,
            width,
            modulus,
            direction: CountDirection::Up,
            clock: ClockLine::new(),
        }
    }

    /// Sets the direction used when `tick` is given no per-call direction.
    pub fn with_direction(mut self, direction: CountDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Samples the clock and counts once on a rising edge.
    ///
    /// # Arguments
    ///
    /// * `clock_sample` - Clock level at this step
    /// * `direction` - Per-call direction (up/down counter); `None` uses
    ///   the direction fixed at construction
    pub fn tick(&mut self, clock_sample: bool, direction: Option<CountDirection>) {
        if self.clock.sample(clock_sample).is_rising() {
            let dir = direction.unwrap_or(self.direction);
            self.count = self.next_count(dir);
        }
    }

    /// Computes the count one step away in `dir`.
    fn next_count(&self, dir: CountDirection) -> u64 {
        match (self.modulus, dir) {
            (Some(m), CountDirection::Up) => {
                if self.count + 1 >= m {
                    0
                } else {
                    self.count + 1
                }
            }
            (Some(m), CountDirection::Down) => {
                if self.count == 0 {
                    m - 1
                } else {
                    self.count - 1
                }
            }
            (None, CountDirection::Up) => self.count.wrapping_add(1) & mask(self.width),
            (None, CountDirection::Down) => self.count.wrapping_sub(1) & mask(self.width),
        }
    }

    /// Returns the current count.
    pub fn read(&self) -> u64 {
        self.count
    }

    /// Returns the storage width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the explicit modulus, if any.
    pub fn modulus(&self) -> Option<u64> {
        self.modulus
    }

    /// Returns the largest value the counter can hold.
    pub fn max_value(&self) -> u64 {
        match self.modulus {
            Some(m) => m - 1,
            None => mask(self.width),
        }
    }

    /// Returns the construction-time direction.
    pub fn direction(&self) -> CountDirection {
        self.direction
    }

    /// Checks whether the next edge in the fixed direction wraps the count.
    ///
    /// This is the carry/borrow output used to cascade counters.
    pub fn is_terminal(&self) -> bool {
        match self.direction {
            CountDirection::Up => self.count == self.max_value(),
            CountDirection::Down => self.count == 0,
        }
    }

    /// Asynchronously loads `value`.
    ///
    /// # Returns
    ///
    /// `InvalidState` if `value` is outside the counter's range; the count
    /// is left untouched.
    pub fn preset(&mut self, value: u64) -> SimResult<()> {
        if value > self.max_value() {
            return Err(SimError::InvalidState(format!(
                "preset {} outside counter range 0..={}",
                value,
                self.max_value()
            )));
        }
        self.count = value;
        Ok(())
    }

    /// Asynchronously clears the count.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl Sequential for Counter {
    fn kind(&self) -> &'static str {
        "counter"
    }

    fn width(&self) -> usize {
        self.width
    }

    fn peek(&self) -> u64 {
        self.count
    }

    fn clock(&mut self, clock_sample: bool) -> usize {
        self.tick(clock_sample, None);
        0
    }

    fn reset(&mut self) {
        Counter::reset(self);
    }
}
