//! Clocked Element Interface.
//!
//! Defines the common behavior of elements that can free-run from a clock
//! alone (counters and shift registers). It allows a driver to advance and
//! probe disparate elements uniformly.

/// An element advanced only by clock samples.
pub trait Sequential {
    /// Returns a short name for the element type.
    ///
    /// Used for tracing and configuration diagnostics.
    fn kind(&self) -> &'static str;

    /// Returns the element's width in bits.
    fn width(&self) -> usize;

    /// Returns the current value without side effects.
    fn peek(&self) -> u64;

    /// Feeds one clock sample to the element.
    ///
    /// # Returns
    ///
    /// The number of asynchronous propagation steps the sample caused
    /// (always 0 for synchronous elements).
    fn clock(&mut self, clock_sample: bool) -> usize;

    /// Asynchronously returns the element to its power-on state.
    fn reset(&mut self);
}
