//! Shift Registers, Ring Counters, and Johnson Counters.
//!
//! A `ShiftRegister` wraps a `Register` and, on each rising edge, moves
//! every bit one position in its configured direction. The bit entering at
//! the open end is chosen by the fill policy. Ring and Johnson counters are
//! shift registers whose exiting bit is fed back unchanged or inverted.

use crate::common::bits::{self, mask};
use crate::common::error::SimResult;
use crate::core::register::Register;
use crate::core::traits::Sequential;
use serde::Deserialize;

/// Direction bits travel on each shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    /// Toward the MSB: `cells[0]` takes the incoming bit, `cells[W-1]` exits.
    Left,
    /// Toward the LSB: `cells[W-1]` takes the incoming bit, `cells[0]` exits.
    #[default]
    Right,
}

/// Source of the bit entering the register on each shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
pub enum FillPolicy {
    /// The caller's serial input (low when none is supplied).
    #[serde(rename = "serial")]
    Serial,
    /// The exiting bit, unchanged (ring counter).
    #[serde(rename = "wrap")]
    WrapAround,
    /// The exiting bit, inverted (Johnson counter).
    #[serde(rename = "invert")]
    InvertedWrapAround,
    /// Always 0.
    #[default]
    #[serde(rename = "zero")]
    Zero,
}

/// Directional shift register with a selectable fill source.
#[derive(Clone, Debug)]
pub struct ShiftRegister {
    reg: Register,
    direction: ShiftDirection,
    fill: FillPolicy,
    initial: u64,
}

impl ShiftRegister {
    /// Creates a cleared shift register.
    ///
    /// # Arguments
    ///
    /// * `width` - Number of bits (1 to 64)
    /// * `direction` - Shift direction
    /// * `fill` - Fill policy for the incoming bit
    pub fn new(width: usize, direction: ShiftDirection, fill: FillPolicy) -> SimResult<Self> {
        Ok(Self {
            reg: Register::new(width)?,
            direction,
            fill,
            initial: 0,
        })
    }

    /// Presets the register to `value` and makes it the reset state.
    pub fn with_initial(mut self, value: u64) -> Self {
        self.initial = value & mask(self.reg.width());
        self.reg.preset(self.initial);
        self
    }

    /// Creates a ring counter of `width` bits initialized to `0..01`.
    ///
    /// The single set bit walks toward the MSB and wraps back to bit 0,
    /// giving `width` distinct one-hot states.
    pub fn ring(width: usize) -> SimResult<Self> {
        Ok(Self::new(width, ShiftDirection::Left, FillPolicy::WrapAround)?.with_initial(1))
    }

    /// Creates a Johnson (twisted-ring) counter of `width` bits, cleared.
    ///
    /// The counter fills with ones from bit 0 upward, then with zeros,
    /// giving `2 * width` distinct states.
    pub fn johnson(width: usize) -> SimResult<Self> {
        Self::new(width, ShiftDirection::Left, FillPolicy::InvertedWrapAround)
    }

    /// Shifts one position on a rising edge.
    ///
    /// The incoming bit is computed from the state before the edge, so the
    /// exiting and entering bits are exchanged in one atomic update.
    ///
    /// # Arguments
    ///
    /// * `serial_in` - Serial input level, consulted only under `FillPolicy::Serial`
    /// * `clock_sample` - Clock level at this step
    pub fn shift(&mut self, serial_in: Option<bool>, clock_sample: bool) {
        let width = self.reg.width();
        let current = self.reg.read();
        let outgoing = self.serial_out();
        let incoming = match self.fill {
            FillPolicy::Serial => serial_in.unwrap_or(false),
            FillPolicy::WrapAround => outgoing,
            FillPolicy::InvertedWrapAround => !outgoing,
            FillPolicy::Zero => false,
        };

        let next = match self.direction {
            ShiftDirection::Right => (current >> 1) | ((incoming as u64) << (width - 1)),
            ShiftDirection::Left => ((current << 1) & mask(width)) | incoming as u64,
        };
        self.reg.clock_in(next, clock_sample);
    }

    /// Parallel load, as `Register::load`.
    pub fn load(&mut self, value: u64, enable: bool, clock_sample: bool) {
        self.reg.load(value, enable, clock_sample);
    }

    /// Returns the bit that exits on the next shift.
    pub fn serial_out(&self) -> bool {
        let idx = match self.direction {
            ShiftDirection::Right => 0,
            ShiftDirection::Left => self.reg.width() - 1,
        };
        self.reg.bit(idx).unwrap_or(false)
    }

    /// Reconstructs the stored word, LSB first.
    pub fn read(&self) -> u64 {
        self.reg.read()
    }

    /// Formats the stored word as a binary string, MSB first.
    pub fn to_binary(&self) -> String {
        bits::to_binary(self.read(), self.width())
    }

    /// Returns the register width in bits.
    pub fn width(&self) -> usize {
        self.reg.width()
    }

    /// Returns the shift direction.
    pub fn direction(&self) -> ShiftDirection {
        self.direction
    }

    /// Returns the fill policy.
    pub fn fill(&self) -> FillPolicy {
        self.fill
    }

    /// Asynchronously forces the stored word to `value`.
    pub fn preset(&mut self, value: u64) {
        self.reg.preset(value);
    }

    /// Asynchronously clears every cell.
    pub fn clear(&mut self) {
        self.reg.clear();
    }
}

impl Sequential for ShiftRegister {
    fn kind(&self) -> &'static str {
        match self.fill {
            FillPolicy::WrapAround => "ring",
            FillPolicy::InvertedWrapAround => "johnson",
            FillPolicy::Serial | FillPolicy::Zero => "shift_register",
        }
    }

    fn width(&self) -> usize {
        self.reg.width()
    }

    fn peek(&self) -> u64 {
        self.read()
    }

    fn clock(&mut self, clock_sample: bool) -> usize {
        self.shift(None, clock_sample);
        0
    }

    /// Restores the state given to `with_initial` (0 by default).
    fn reset(&mut self) {
        self.reg.preset(self.initial);
    }
}
