//! Clocked storage and counting elements.
//!
//! This module contains the building blocks of the simulator, leaf-first:
//! clock edge detection, latches, flip-flops, registers, shift registers,
//! synchronous and ripple counters, and register files. Each element owns
//! its own clock history and is advanced only by explicit caller steps.

/// Clock line sampling and edge classification.
pub mod clock;

/// Synchronous counters with modulus and direction.
pub mod counter;

/// Edge-triggered D, JK, and T flip-flops.
pub mod flipflop;

/// Level-sensitive SR and D latches.
pub mod latch;

/// Parallel-load registers.
pub mod register;

/// Addressable register files with an optional hard-wired zero slot.
pub mod register_file;

/// Asynchronous ripple counters with an explicit settle process.
pub mod ripple;

/// Shift registers, ring counters, and Johnson counters.
pub mod shift;

/// Common interface for free-running clocked elements.
pub mod traits;

pub use clock::{ClockLine, EdgeKind, Trigger};
pub use counter::{CountDirection, Counter};
pub use flipflop::{BitCell, JkAction, JkFlipFlop, TFlipFlop};
pub use latch::{DLatch, LatchState, SrLatch};
pub use register::Register;
pub use register_file::RegisterFile;
pub use ripple::RippleCounter;
pub use shift::{FillPolicy, ShiftDirection, ShiftRegister};
pub use traits::Sequential;
