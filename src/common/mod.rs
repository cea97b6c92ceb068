//! Common utilities and types used throughout the sequential-logic simulator.
//!
//! This module provides the error taxonomy and the width-aware bit helpers
//! that are shared by every clocked element.

/// Width masks, bit extraction, and packing helpers.
pub mod bits;

/// Error types raised by element construction and mutation.
pub mod error;

pub use bits::{mask, MAX_WIDTH};
pub use error::{SimError, SimResult};
