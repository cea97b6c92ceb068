//! Test module organization.
//!
//! This module organizes all integration tests for the sequential logic simulator.


/// Bit helper and error type tests.
mod common_tests;



/// SR and D latch tests.
mod latch_tests;





/// Configuration, builder, and simulation harness tests.
mod sim_tests;
