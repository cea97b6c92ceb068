//! Simulation harness.
//!
//! This module drives a set of free-running clocked elements from a
//! generated square-wave clock. Each step feeds one sample to every
//! element in attachment order, then records the resulting values in the
//! trace and the run statistics.

/// Instantiation of elements from configuration entries.
pub mod builder;

/// Square-wave clock generation.
pub mod clock_gen;

/// Per-sample value recording and JSON export.
pub mod trace;

use std::collections::BTreeMap;

use crate::common::bits;
use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::core::clock::ClockLine;
use crate::core::traits::Sequential;
use crate::stats::SimStats;

pub use clock_gen::ClockGenerator;
pub use trace::{Trace, TraceRecord};

/// A named element attached to a simulation.
pub struct Probe {
    /// Unique name used in traces and statistics.
    pub name: String,
    /// The element itself.
    pub element: Box<dyn Sequential>,
}

/// Clock-driven simulation of independent elements.
pub struct Simulation {
    probes: Vec<Probe>,
    clock: ClockGenerator,
    line: ClockLine,
    trace: Trace,
    pub stats: SimStats,
    pub trace_enabled: bool,
}

impl Simulation {
    /// Creates an empty simulation driven by `clock`.
    pub fn new(clock: ClockGenerator) -> Self {
        Self {
            probes: Vec::new(),
            clock,
            line: ClockLine::new(),
            trace: Trace::new(),
            stats: SimStats::default(),
            trace_enabled: cfg!(feature = "always-trace"),
        }
    }

    /// Creates a simulation with every element listed in `config` attached.
    ///
    /// # Returns
    ///
    /// The first construction error among the configured elements.
    pub fn from_config(config: &Config) -> SimResult<Self> {
        let mut sim = Self::new(ClockGenerator::new(config.general.start_level));
        sim.trace_enabled |= config.general.trace;
        for (name, element) in builder::build_elements(config)? {
            sim.attach(name, element)?;
        }
        Ok(sim)
    }

    /// Attaches an element under a unique name.
    ///
    /// # Returns
    ///
    /// `InvalidConfiguration` if the name is already taken.
    pub fn attach(&mut self, name: impl Into<String>, element: Box<dyn Sequential>) -> SimResult<()> {
        let name = name.into();
        if self.probes.iter().any(|p| p.name == name) {
            return Err(SimError::InvalidConfiguration(format!(
                "duplicate element name '{}'",
                name
            )));
        }
        self.probes.push(Probe { name, element });
        Ok(())
    }

    /// Advances the simulation by one clock sample (half a cycle).
    ///
    /// # Returns
    ///
    /// The clock level that was driven.
    pub fn step(&mut self) -> bool {
        let step = self.clock.half_cycles();
        let sample = self.clock.next_sample();
        self.stats.record_sample(self.line.sample(sample));

        let mut values = BTreeMap::new();
        for probe in &mut self.probes {
            let before = probe.element.peek();
            let ripple = probe.element.clock(sample);
            let after = probe.element.peek();
            self.stats.ripple_steps += ripple as u64;
            self.stats.record_change(&probe.name, before != after);
            values.insert(probe.name.clone(), after);
        }

        if self.trace_enabled {
            self.print_sample(step, sample);
        }

        self.trace.push(TraceRecord {
            step,
            clock: sample,
            values,
        });
        sample
    }

    /// Advances the simulation by `cycles` full clock cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.step();
            self.step();
        }
    }

    /// Prints one trace line for the sample just driven.
    fn print_sample(&self, step: u64, sample: bool) {
        let mut line = format!("[step {:>4}] clk={}", step, sample as u8);
        for probe in &self.probes {
            let value = probe.element.peek();
            line.push_str(&format!(
                " {}=0b{}",
                probe.name,
                bits::to_binary(value, probe.element.width())
            ));
        }
        println!("{}", line);
    }

    /// Returns the current value of the named element.
    pub fn peek(&self, name: &str) -> Option<u64> {
        self.probes
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.element.peek())
    }

    /// Returns the attached elements in attachment order.
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Returns the recorded trace.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Returns the number of complete cycles driven so far.
    pub fn cycles(&self) -> u64 {
        self.clock.cycles()
    }

    /// Resets every element to its power-on state and clears the trace.
    ///
    /// The clock keeps running from its current level.
    pub fn reset(&mut self) {
        for probe in &mut self.probes {
            probe.element.reset();
        }
        self.trace.clear();
    }
}
