//! Element Builder.
//!
//! Instantiates clocked elements from their configuration entries, in the
//! order they appear in the configuration file.

use crate::common::error::{SimError, SimResult};
use crate::config::{Config, ElementConfig, ElementKind};
use crate::core::counter::Counter;
use crate::core::ripple::RippleCounter;
use crate::core::shift::ShiftRegister;
use crate::core::traits::Sequential;

/// Builds one element from its configuration entry.
///
/// # Arguments
///
/// * `cfg` - The element's configuration entry
///
/// # Returns
///
/// The boxed element, or the construction error of the underlying type.
pub fn build_element(cfg: &ElementConfig) -> SimResult<Box<dyn Sequential>> {
    let element: Box<dyn Sequential> = match cfg.kind {
        ElementKind::Counter => {
            let mut counter = Counter::new(cfg.width, cfg.modulus)?.with_direction(cfg.direction);
            if let Some(v) = cfg.initial {
                counter.preset(v)?;
            }
            Box::new(counter)
        }
        ElementKind::RippleCounter => {
            let mut counter = RippleCounter::new(cfg.width, cfg.modulus, cfg.direction)?;
            if let Some(v) = cfg.initial {
                counter.preset(v)?;
            }
            Box::new(counter)
        }
        ElementKind::Ring => {
            let ring = ShiftRegister::ring(cfg.width)?;
            Box::new(match cfg.initial {
                Some(v) => ring.with_initial(v),
                None => ring,
            })
        }
        ElementKind::Johnson => {
            let johnson = ShiftRegister::johnson(cfg.width)?;
            Box::new(match cfg.initial {
                Some(v) => johnson.with_initial(v),
                None => johnson,
            })
        }
        ElementKind::ShiftRegister => {
            let sr = ShiftRegister::new(cfg.width, cfg.shift, cfg.fill)?;
            Box::new(sr.with_initial(cfg.initial.unwrap_or(0)))
        }
    };
    Ok(element)
}

/// Builds every element listed in `config`, paired with its name.
///
/// # Returns
///
/// `InvalidConfiguration` for a duplicate element name, otherwise the
/// first construction error encountered.
pub fn build_elements(config: &Config) -> SimResult<Vec<(String, Box<dyn Sequential>)>> {
    let mut built: Vec<(String, Box<dyn Sequential>)> = Vec::with_capacity(config.elements.len());
    for cfg in &config.elements {
        if built.iter().any(|(name, _)| *name == cfg.name) {
            return Err(SimError::InvalidConfiguration(format!(
                "duplicate element name '{}'",
                cfg.name
            )));
        }
        built.push((cfg.name.clone(), build_element(cfg)?));
    }
    Ok(built)
}
