//! Synchronous Sequential-Logic Simulation Library.
//!
//! This crate models clocked storage and counting primitives at the level
//! of discrete clock samples. Every element owns its own clock history,
//! detects edges itself, and changes state only when the caller steps it.
//! Given the same sequence of samples, every element produces the same
//! output sequence.
//!
//! # Architecture
//!
//! * **Core**: latches, flip-flops, registers, shift registers (ring and
//!   Johnson counters included), synchronous and ripple counters, and
//!   register files.
//! * **Sim**: a square-wave clock generator and a driver that steps a set
//!   of free-running elements, recording a trace.
//!
//! # Modules
//!
//! * `common`: Shared error types and bit helpers.
//! * `config`: Configuration loading and parsing.
//! * `core`: Clocked element implementations.
//! * `sim`: Simulation harness, element builder, and trace recording.
//! * `stats`: Run statistics collection.

/// Shared error types and width-aware bit helpers.
///
/// Provides the `SimError` taxonomy returned by every fallible operation
/// and the masking/packing helpers used by multi-bit elements.
pub mod common;

/// Configuration system for simulation runs.
///
/// Loads and parses TOML files describing the clock run and the set of
/// elements to instantiate.
pub mod config;

/// Clocked element implementations.
///
/// Implements edge detection, latches, flip-flops, registers, shift
/// registers, counters, and register files.
pub mod core;

/// Simulation harness, element builder, and trace recording.
///
/// Drives a set of elements from a generated clock and records every
/// sample for inspection or JSON export.
pub mod sim;

/// Run statistics collection and reporting.
///
/// Tracks samples, edges, state changes, and ripple propagation during a
/// simulation run.
pub mod stats;
