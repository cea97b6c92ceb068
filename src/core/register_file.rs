//! Addressable Register File.
//!
//! This module implements a bank of word-wide registers with one clocked
//! write port and any number of read ports. An optional reserved index is
//! hard-wired to zero: it always reads as the zero word and silently drops
//! writes, as with an architectural zero register.

use std::fmt;

use crate::common::error::{SimError, SimResult};
use crate::core::clock::ClockLine;

/// Register file of `T`-sized words (64-bit by default).
///
/// The zero word is `T::default()`.
#[derive(Clone, Debug)]
pub struct RegisterFile<T = u64> {
    slots: Vec<T>,
    reserved_zero: Option<usize>,
    clock: ClockLine,
}

impl<T: Copy + Default> RegisterFile<T> {
    /// Creates a register file with every slot holding the zero word.
    ///
    /// # Arguments
    ///
    /// * `slot_count` - Number of addressable slots
    /// * `reserved_zero_index` - Slot hard-wired to zero, if any
    ///
    /// # Returns
    ///
    /// `InvalidConfiguration` for zero slots or a reserved index outside
    /// `0..slot_count`.
    pub fn new(slot_count: usize, reserved_zero_index: Option<usize>) -> SimResult<Self> {
        if slot_count == 0 {
            return Err(SimError::InvalidConfiguration(
                "register file needs at least one slot".to_string(),
            ));
        }
        if let Some(idx) = reserved_zero_index {
            if idx >= slot_count {
                return Err(SimError::InvalidConfiguration(format!(
                    "reserved zero index {} outside 0..{}",
                    idx, slot_count
                )));
            }
        }
        Ok(Self {
            slots: vec![T::default(); slot_count],
            reserved_zero: reserved_zero_index,
            clock: ClockLine::new(),
        })
    }

    /// Writes `value` to slot `index` on a rising edge when `enable` is high.
    ///
    /// A write to the reserved zero index is a no-op regardless of
    /// `enable` and the clock: neither the slot nor the write port's edge
    /// history changes.
    ///
    /// # Arguments
    ///
    /// * `index` - Destination slot
    /// * `value` - Word to store
    /// * `enable` - Write enable level
    /// * `clock_sample` - Clock level at this step
    ///
    /// # Returns
    ///
    /// `IndexOutOfBounds` for an index past the last slot. Nothing,
    /// including the clock history, is modified in that case.
    pub fn write(
        &mut self,
        index: usize,
        value: T,
        enable: bool,
        clock_sample: bool,
    ) -> SimResult<()> {
        self.check_index(index)?;
        if Some(index) == self.reserved_zero {
            return Ok(());
        }
        if self.clock.sample(clock_sample).is_rising() && enable {
            self.slots[index] = value;
        }
        Ok(())
    }

    /// Reads slot `index`.
    ///
    /// The reserved zero index always yields the zero word.
    pub fn read(&self, index: usize) -> SimResult<T> {
        self.check_index(index)?;
        if Some(index) == self.reserved_zero {
            Ok(T::default())
        } else {
            Ok(self.slots[index])
        }
    }

    /// Reads several slots at once, one per read port.
    ///
    /// Fails on the first out-of-range index.
    pub fn read_ports(&self, indices: &[usize]) -> SimResult<Vec<T>> {
        indices.iter().map(|&idx| self.read(idx)).collect()
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: construction rejects an empty file.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the hard-wired zero index, if any.
    pub fn reserved_zero_index(&self) -> Option<usize> {
        self.reserved_zero
    }

    /// Asynchronously clears every slot.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = T::default());
    }

    fn check_index(&self, index: usize) -> SimResult<()> {
        if index >= self.slots.len() {
            return Err(SimError::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl<T: Copy + Default + fmt::LowerHex> fmt::Display for RegisterFile<T> {
    /// Dumps the file two slots per line in hexadecimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.slots.chunks(2).enumerate() {
            let base = i * 2;
            for (j, _) in pair.iter().enumerate() {
                let idx = base + j;
                let val = self.read(idx).map_err(|_| fmt::Error)?;
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "r{:<2}={:#018x}", idx, val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
