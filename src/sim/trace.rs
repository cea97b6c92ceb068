//! Sample Trace Recording.
//!
//! Records the value of every attached element after each clock sample.
//! A trace can be queried per element or exported as JSON.

use serde::Serialize;
use std::collections::BTreeMap;

/// Element values observed after one clock sample.
#[derive(Clone, Debug, Serialize)]
pub struct TraceRecord {
    /// Sample index, starting at 0.
    pub step: u64,
    /// Clock level driven at this sample.
    pub clock: bool,
    /// Value of each element, keyed by name.
    pub values: BTreeMap<String, u64>,
}

/// Ordered list of trace records.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Trace {
    records: Vec<TraceRecord>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record.
    pub fn push(&mut self, record: TraceRecord) {
        self.records.push(record);
    }

    /// Returns every recorded sample.
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Returns the value history of one element, one entry per sample.
    ///
    /// Samples in which the element was not present are skipped.
    pub fn values_of(&self, name: &str) -> Vec<u64> {
        self.records
            .iter()
            .filter_map(|r| r.values.get(name).copied())
            .collect()
    }

    /// Returns the value history of one element sampled after each rising
    /// edge only.
    ///
    /// The line is taken to rest low before the first record, matching a
    /// freshly constructed `ClockLine`.
    pub fn rising_values_of(&self, name: &str) -> Vec<u64> {
        let mut prev = false;
        let mut out = Vec::new();
        for r in &self.records {
            if !prev && r.clock {
                if let Some(v) = r.values.get(name) {
                    out.push(*v);
                }
            }
            prev = r.clock;
        }
        out
    }

    /// Serializes the trace as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
