//! Simulation Error Types.
//!
//! This module defines the error taxonomy shared by every clocked element.
//! All errors are local and recoverable: an element that rejects an input
//! is left exactly as it was before the call.

use thiserror::Error;

/// Errors raised by element construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A latch was driven with a forbidden input combination.
    ///
    /// Raised for the `S=1, R=1` input of an SR latch, whose output
    /// would otherwise be unspecified.
    #[error("InvalidState: {0}")]
    InvalidState(String),

    /// A register-file slot outside `0..len` was addressed.
    #[error("IndexOutOfBounds: index {index} outside 0..{len}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of slots in the register file.
        len: usize,
    },

    /// An element or configuration file was rejected at construction time.
    ///
    /// Covers zero or oversized widths, zero moduli, moduli that do not fit
    /// the storage width, misplaced reserved-zero indices, and malformed
    /// configuration files.
    #[error("InvalidConfiguration: {0}")]
    InvalidConfiguration(String),
}

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;
