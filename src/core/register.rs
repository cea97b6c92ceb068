//! Parallel-Load Register.
//!
//! A register is a fixed-width row of `BitCell`s sharing one clock input.
//! Every cell is sampled on every step, so all cells see the same edge and
//! the stored word changes atomically.

use crate::common::bits::{self, check_width};
use crate::common::error::SimResult;
use crate::core::flipflop::BitCell;

/// Fixed-width register built from D flip-flops.
///
/// Bit 0 (`cells[0]`) is the least significant bit.
#[derive(Clone, Debug)]
pub struct Register {
    cells: Vec<BitCell>,
}

impl Register {
    /// Creates a register of `width` cells, all holding 0.
    ///
    /// # Arguments
    ///
    /// * `width` - Number of bits (1 to 64)
    ///
    /// # Returns
    ///
    /// `InvalidConfiguration` for a zero width or one above 64 bits.
    pub fn new(width: usize) -> SimResult<Self> {
        check_width(width, "register")?;
        Ok(Self {
            cells: vec![BitCell::new(); width],
        })
    }

    /// Loads `value` in parallel on a rising edge when `enable` is high.
    ///
    /// With `enable` low every cell is stepped with its own current value,
    /// so the stored word never changes no matter how many edges arrive.
    /// Bits of `value` above the register width are ignored.
    ///
    /// # Arguments
    ///
    /// * `value` - Word to load
    /// * `enable` - Load enable level
    /// * `clock_sample` - Clock level at this step
    pub fn load(&mut self, value: u64, enable: bool, clock_sample: bool) {
        let next = if enable { value } else { self.read() };
        self.clock_in(next, clock_sample);
    }

    /// Reconstructs the stored word, LSB first.
    pub fn read(&self) -> u64 {
        bits::pack(self.cells.iter().map(BitCell::read))
    }

    /// Returns the value of a single cell, or `None` past the width.
    pub fn bit(&self, idx: usize) -> Option<bool> {
        self.cells.get(idx).map(BitCell::read)
    }

    /// Returns the register width in bits.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Asynchronously forces the stored word to `value` (masked to width).
    pub fn preset(&mut self, value: u64) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            cell.force(bits::bit(value, i));
        }
    }

    /// Asynchronously clears every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(BitCell::clear);
    }

    /// Steps every cell with the matching bit of `next`.
    pub(crate) fn clock_in(&mut self, next: u64, clock_sample: bool) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            cell.step(bits::bit(next, i), clock_sample);
        }
    }
}
