use serde::Deserialize;
use std::fs;
use std::str::FromStr;

use crate::common::error::{SimError, SimResult};
use crate::core::counter::CountDirection;
use crate::core::shift::{FillPolicy, ShiftDirection};

const DEFAULT_CYCLES: u64 = 16;
const DEFAULT_WIDTH: usize = 4;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default, rename = "element")]
    pub elements: Vec<ElementConfig>,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// `InvalidConfiguration` if the file cannot be read or parsed.
    pub fn load(path: &str) -> SimResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SimError::InvalidConfiguration(format!("cannot read '{}': {}", path, e))
        })?;
        content.parse()
    }
}

impl FromStr for Config {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        toml::from_str(s).map_err(|e| SimError::InvalidConfiguration(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace: bool,

    #[serde(default = "default_cycles")]
    pub cycles: u64,

    #[serde(default)]
    pub start_level: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            cycles: DEFAULT_CYCLES,
            start_level: false,
        }
    }
}

fn default_cycles() -> u64 {
    DEFAULT_CYCLES
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Counter,
    RippleCounter,
    Ring,
    Johnson,
    ShiftRegister,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ElementConfig {
    pub name: String,

    pub kind: ElementKind,

    #[serde(default = "default_width")]
    pub width: usize,

    #[serde(default)]
    pub modulus: Option<u64>,

    #[serde(default)]
    pub direction: CountDirection,

    #[serde(default)]
    pub shift: ShiftDirection,

    #[serde(default)]
    pub fill: FillPolicy,

    #[serde(default)]
    pub initial: Option<u64>,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}
