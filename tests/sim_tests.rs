//! Integration tests for configuration, element building, and the simulation harness.

use seqlogic::common::SimError;
use seqlogic::config::{Config, ElementKind};
use seqlogic::core::counter::{CountDirection, Counter};
use seqlogic::core::shift::{FillPolicy, ShiftDirection, ShiftRegister};
use seqlogic::core::traits::Sequential;
use seqlogic::sim::builder::{build_element, build_elements};
use seqlogic::sim::{ClockGenerator, Simulation};

const SAMPLE_CONFIG: &str = r#"
[general]
trace = false
cycles = 18

[[element]]
name = "count4"
kind = "counter"
width = 4

[[element]]
name = "ring"
kind = "ring"
width = 4

[[element]]
name = "johnson"
kind = "johnson"
width = 3

[[element]]
name = "ripple"
kind = "ripple_counter"
width = 4
modulus = 10

[[element]]
name = "sipo"
kind = "shift_register"
width = 8
shift = "left"
fill = "wrap"
initial = 0x81
"#;

/// Tests parsing of a full configuration.
#[test]
fn test_config_parse() {
    let config: Config = SAMPLE_CONFIG.parse().unwrap();

    assert!(!config.general.trace);
    assert_eq!(config.general.cycles, 18);
    assert!(!config.general.start_level);
    assert_eq!(config.elements.len(), 5);

    let sipo = &config.elements[4];
    assert_eq!(sipo.kind, ElementKind::ShiftRegister);
    assert_eq!(sipo.shift, ShiftDirection::Left);
    assert_eq!(sipo.fill, FillPolicy::WrapAround);
    assert_eq!(sipo.initial, Some(0x81));

    let ripple = &config.elements[3];
    assert_eq!(ripple.modulus, Some(10));
    assert_eq!(ripple.direction, CountDirection::Up);
}

/// Tests configuration defaults.
#[test]
fn test_config_defaults() {
    let config: Config = "[[element]]\nname = \"c\"\nkind = \"counter\"\n"
        .parse()
        .unwrap();
    assert_eq!(config.general.cycles, 16);
    assert!(!config.general.trace);
    assert_eq!(config.elements[0].width, 4);
    assert_eq!(config.elements[0].modulus, None);
    assert_eq!(config.elements[0].fill, FillPolicy::Zero);

    let empty: Config = "".parse().unwrap();
    assert!(empty.elements.is_empty());
}

/// Tests rejection of malformed configurations.
#[test]
fn test_config_errors() {
    let result = "[[element]]\nname = \"x\"\nkind = \"flux_capacitor\"\n".parse::<Config>();
    assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));

    let result = Config::load("does/not/exist.toml");
    assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
}

/// Tests loading the bundled default configuration.
#[test]
fn test_config_load_default_file() {
    let config = Config::load("configs/default.toml").unwrap();
    assert_eq!(config.general.cycles, 18);
    assert!(build_elements(&config).is_ok());
}

/// Tests that the builder surfaces element construction errors.
#[test]
fn test_builder_errors() {
    let config: Config = "[[element]]\nname = \"c\"\nkind = \"counter\"\nmodulus = 0\n"
        .parse()
        .unwrap();
    assert!(matches!(
        build_element(&config.elements[0]),
        Err(SimError::InvalidConfiguration(_))
    ));

    let config: Config = "[[element]]\nname = \"c\"\nkind = \"counter\"\ninitial = 99\n"
        .parse()
        .unwrap();
    assert!(matches!(
        build_element(&config.elements[0]),
        Err(SimError::InvalidState(_))
    ));

    let config: Config = "[[element]]\nname = \"a\"\nkind = \"ring\"\n[[element]]\nname = \"a\"\nkind = \"johnson\"\n"
        .parse()
        .unwrap();
    assert!(matches!(
        build_elements(&config),
        Err(SimError::InvalidConfiguration(_))
    ));
}

/// Tests the element kinds reported by the builder.
#[test]
fn test_builder_kinds() {
    let config: Config = SAMPLE_CONFIG.parse().unwrap();
    let built = build_elements(&config).unwrap();
    let kinds: Vec<&str> = built.iter().map(|(_, e)| e.kind()).collect();
    assert_eq!(
        kinds,
        vec!["counter", "ring", "johnson", "ripple_counter", "ring"]
    );
    assert_eq!(built[4].1.peek(), 0x81);
}

/// Tests the square-wave clock generator.
#[test]
fn test_clock_generator() {
    let mut clock = ClockGenerator::default();
    let samples: Vec<bool> = (0..5).map(|_| clock.next_sample()).collect();
    assert_eq!(samples, vec![false, true, false, true, false]);
    assert_eq!(clock.half_cycles(), 5);
    assert_eq!(clock.cycles(), 2);

    let mut high = ClockGenerator::new(true);
    assert!(high.next_sample());
    assert!(!high.next_sample());
}

/// Tests the counter golden vector through the full harness.
#[test]
fn test_simulation_counter_golden() {
    let config: Config = SAMPLE_CONFIG.parse().unwrap();
    let mut sim = Simulation::from_config(&config).unwrap();
    sim.run(config.general.cycles);

    let mut expected: Vec<u64> = (1..16).collect();
    expected.extend([0, 1, 2]);
    assert_eq!(sim.trace().rising_values_of("count4"), expected);
    assert_eq!(sim.peek("count4"), Some(2));
    assert_eq!(sim.cycles(), 18);
}

/// Tests ring, Johnson, and ripple elements side by side in one run.
#[test]
fn test_simulation_mixed_elements() {
    let config: Config = SAMPLE_CONFIG.parse().unwrap();
    let mut sim = Simulation::from_config(&config).unwrap();
    sim.run(6);

    assert_eq!(
        sim.trace().rising_values_of("ring"),
        vec![0b0010, 0b0100, 0b1000, 0b0001, 0b0010, 0b0100]
    );
    assert_eq!(
        sim.trace().rising_values_of("johnson"),
        vec![0b001, 0b011, 0b111, 0b110, 0b100, 0b000]
    );
    assert_eq!(
        sim.trace().rising_values_of("ripple"),
        vec![1, 2, 3, 4, 5, 6]
    );
    assert_eq!(sim.trace().values_of("ring").len(), 12);
}

/// Tests run statistics.
#[test]
fn test_simulation_stats() {
    let config: Config = SAMPLE_CONFIG.parse().unwrap();
    let mut sim = Simulation::from_config(&config).unwrap();
    sim.run(18);

    assert_eq!(sim.stats.samples, 36);
    assert_eq!(sim.stats.rising_edges, 18);
    assert_eq!(sim.stats.falling_edges, 17);
    assert_eq!(sim.stats.changes_of("count4"), 18);
    assert_eq!(sim.stats.changes_of("ring"), 18);
    assert!(sim.stats.ripple_steps > 0);
}

/// Tests that identical runs produce identical traces.
#[test]
fn test_simulation_determinism() {
    let config: Config = SAMPLE_CONFIG.parse().unwrap();
    let mut a = Simulation::from_config(&config).unwrap();
    let mut b = Simulation::from_config(&config).unwrap();
    a.run(25);
    b.run(25);
    assert_eq!(a.trace().to_json().unwrap(), b.trace().to_json().unwrap());
}

/// Tests JSON export of the trace.
#[test]
fn test_simulation_json_trace() {
    let config: Config = SAMPLE_CONFIG.parse().unwrap();
    let mut sim = Simulation::from_config(&config).unwrap();
    sim.run(2);

    let json = sim.trace().to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[1]["step"], 1);
    assert_eq!(records[1]["clock"], true);
    assert_eq!(records[1]["values"]["count4"], 1);
    assert_eq!(records[1]["values"]["ring"], 2);
}

/// Tests manual attachment, duplicate names, and reset.
#[test]
fn test_simulation_attach_and_reset() {
    let mut sim = Simulation::new(ClockGenerator::default());
    sim.attach("down", Box::new(Counter::new(3, None).unwrap().with_direction(CountDirection::Down)))
        .unwrap();
    sim.attach("ring", Box::new(ShiftRegister::ring(3).unwrap()))
        .unwrap();
    assert!(matches!(
        sim.attach("ring", Box::new(ShiftRegister::johnson(3).unwrap())),
        Err(SimError::InvalidConfiguration(_))
    ));

    sim.run(2);
    assert_eq!(sim.peek("down"), Some(6));
    assert_eq!(sim.peek("ring"), Some(0b100));
    assert_eq!(sim.peek("missing"), None);

    sim.reset();
    assert_eq!(sim.peek("down"), Some(0));
    assert_eq!(sim.peek("ring"), Some(0b001));
    assert!(sim.trace().records().is_empty());
    assert_eq!(sim.probes().len(), 2);
}

/// Tests that `run` drives exactly two samples per cycle.
#[test]
fn test_simulation_run_sample_count() {
    let mut sim = Simulation::new(ClockGenerator::default());
    sim.attach("c", Box::new(Counter::new(4, None).unwrap()))
        .unwrap();

    sim.run(0);
    assert!(sim.trace().records().is_empty());

    sim.run(3);
    assert_eq!(sim.trace().records().len(), 6);
    assert_eq!(sim.stats.samples, 6);
    assert_eq!(sim.cycles(), 3);
    assert_eq!(sim.peek("c"), Some(3));
}

/// Tests a run that starts with the clock high.
#[test]
fn test_simulation_start_high() {
    let config: Config = "[general]\nstart_level = true\n[[element]]\nname = \"c\"\nkind = \"counter\"\n"
        .parse()
        .unwrap();
    let mut sim = Simulation::from_config(&config).unwrap();
    assert!(sim.step());
    assert_eq!(sim.peek("c"), Some(1));
}
