//! Sequential Logic Simulator CLI.
//!
//! The main executable for the simulator. It handles command-line argument
//! parsing, builds the configured elements, and drives them from a
//! square-wave clock for a fixed number of cycles.
//!
//! # Usage
//!
//! ```text
//! seqlogic-sim --config configs/default.toml --cycles 18 --json trace.json
//! ```

use clap::Parser;
use std::{fs, process};

extern crate seqlogic;

use seqlogic::common::bits;
use seqlogic::config::Config;
use seqlogic::sim::Simulation;

/// Command-line arguments for the sequential logic simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Clock-Driven Sequential Logic Simulator")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    /// Overrides `general.cycles` from the configuration file.
    #[arg(long)]
    cycles: Option<u64>,

    /// Writes the recorded trace to this path as JSON.
    #[arg(long)]
    json: Option<String>,

    /// Prints one line per clock sample.
    #[arg(short, long)]
    trace: bool,
}

/// Main entry point for the sequential logic simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and loads the TOML configuration file.
/// 2. **Initialization**: Builds every configured element and attaches it to a `Simulation`.
/// 3. **Simulation Loop**: Drives the requested number of full clock cycles.
/// 4. **Teardown**: Prints final element values and run statistics, and
///    optionally writes the trace as JSON.
fn main() {
    let args = Args::parse();

    let config = Config::load(&args.config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    });

    let mut sim = Simulation::from_config(&config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    });
    sim.trace_enabled |= args.trace;

    let cycles = args.cycles.unwrap_or(config.general.cycles);

    println!("Simulation Configuration");
    println!("------------------------");
    println!("  Config:             {}", args.config);
    println!("  Cycles:             {}", cycles);
    println!("  Start Level:        {}", config.general.start_level as u8);
    println!("  Trace:              {}", sim.trace_enabled);
    println!("Elements:");
    for probe in sim.probes() {
        println!(
            "  {:<18}  {} ({} bits)",
            probe.name,
            probe.element.kind(),
            probe.element.width()
        );
    }
    println!("------------------------");

    println!("[*] Running {} cycles", cycles);
    sim.run(cycles);

    println!("\n[*] Final state after {} cycles", sim.cycles());
    for probe in sim.probes() {
        let value = probe.element.peek();
        println!(
            "  {:<18}  0b{} ({})",
            probe.name,
            bits::to_binary(value, probe.element.width()),
            value
        );
    }

    if let Some(path) = args.json {
        let json = sim.trace().to_json().unwrap_or_else(|e| {
            eprintln!("[!] FATAL: could not serialize trace: {}", e);
            process::exit(1);
        });
        if let Err(e) = fs::write(&path, json) {
            eprintln!("[!] FATAL: could not write '{}': {}", path, e);
            process::exit(1);
        }
        println!("[*] Trace written to {}", path);
    }

    sim.stats.print();
}
