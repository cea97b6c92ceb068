//! Simulation statistics collection and reporting.
//!
//! Tracks clock samples, detected edges, per-element state changes, and
//! ripple propagation during a simulation run.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::core::clock::EdgeKind;

/// Run statistics.
pub struct SimStats {
    start_time: Instant,
    pub samples: u64,
    pub rising_edges: u64,
    pub falling_edges: u64,
    pub ripple_steps: u64,
    pub changes: BTreeMap<String, u64>,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            samples: 0,
            rising_edges: 0,
            falling_edges: 0,
            ripple_steps: 0,
            changes: BTreeMap::new(),
        }
    }
}

impl SimStats {
    /// Records one driven clock sample and its edge classification.
    pub fn record_sample(&mut self, edge: EdgeKind) {
        self.samples += 1;
        match edge {
            EdgeKind::Rising => self.rising_edges += 1,
            EdgeKind::Falling => self.falling_edges += 1,
            EdgeKind::None => {}
        }
    }

    /// Records whether an element's value changed on the last sample.
    ///
    /// Elements are registered on first sight so unchanged elements still
    /// appear in the report with a zero count.
    pub fn record_change(&mut self, name: &str, changed: bool) {
        let entry = self.changes.entry(name.to_string()).or_insert(0);
        if changed {
            *entry += 1;
        }
    }

    /// Returns the number of state changes seen for `name`.
    pub fn changes_of(&self, name: &str) -> u64 {
        self.changes.get(name).copied().unwrap_or(0)
    }

    /// Prints a formatted summary of the run.
    ///
    /// Displays sample and edge counts, host throughput, ripple propagation
    /// totals, and the number of state changes per element.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let rate = if seconds > 0.0 {
            (self.samples as f64 / seconds) / 1000.0
        } else {
            0.0
        };
        let avg_ripple = if self.rising_edges > 0 {
            self.ripple_steps as f64 / self.rising_edges as f64
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("SEQUENTIAL LOGIC SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_samples              {}", self.samples);
        println!("sim_cycles               {}", self.samples / 2);
        println!("sim_rate                 {:.2} k samples/s", rate);
        println!("----------------------------------------------------------");
        println!("CLOCK");
        println!("  edges.rising           {}", self.rising_edges);
        println!("  edges.falling          {}", self.falling_edges);
        println!("  ripple.steps           {}", self.ripple_steps);
        println!("  ripple.per_edge        {:.2}", avg_ripple);
        println!("----------------------------------------------------------");
        println!("ELEMENTS");
        for (name, count) in &self.changes {
            println!("  {:<22} {} changes", name, count);
        }
        println!("==========================================================");
    }
}
