//! Shift catalog loading functionality.
//!
//! This module provides the [`ShiftCatalog`] type for loading named shift
//! configurations from a YAML file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftConfig;

use super::types::ShiftCatalogConfig;

/// Loads and provides access to the shift catalog.
///
/// The catalog maps shift codes to [`ShiftConfig`]s. It plays the role of
/// the external configuration store: the HTTP boundary resolves the shift
/// an employee is assigned to before invoking the engine.
///
/// # File Structure
///
/// ```text
/// config/shifts.yaml
/// shifts:
///   commercial:
///     name: Commercial
///     scheduled_start: "09:00"
///     scheduled_end: "18:00"
///     break_minutes: 60
///     grace_minutes: 5
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ShiftCatalog;
///
/// let catalog = ShiftCatalog::load("./config/shifts.yaml")?;
/// let shift = catalog.get_shift("commercial")?;
/// println!("Shift: {}", shift.name);
/// # Ok::<(), timesheet_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShiftCatalog {
    shifts: HashMap<String, ShiftConfig>,
}

impl ShiftCatalog {
    /// Loads the catalog from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be
    /// read and [`EngineError::ConfigParseError`] when it is not valid
    /// catalog YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: ShiftCatalogConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        let shifts = config
            .shifts
            .into_iter()
            .map(|(code, def)| {
                (
                    code,
                    ShiftConfig {
                        name: def.name,
                        scheduled_start: def.scheduled_start,
                        scheduled_end: def.scheduled_end,
                        break_minutes: def.break_minutes,
                        grace_minutes: def.grace_minutes,
                    },
                )
            })
            .collect();

        Ok(Self { shifts })
    }

    /// Builds a catalog directly from shift configurations.
    ///
    /// Mainly useful in tests and for callers that already hold resolved
    /// shift data.
    pub fn from_shifts(shifts: HashMap<String, ShiftConfig>) -> Self {
        Self { shifts }
    }

    /// Looks up a shift by its catalog code.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ShiftNotFound`] when the code is absent.
    pub fn get_shift(&self, code: &str) -> EngineResult<&ShiftConfig> {
        self.shifts
            .get(code)
            .ok_or_else(|| EngineError::ShiftNotFound {
                code: code.to_string(),
            })
    }

    /// Returns all shifts keyed by catalog code.
    pub fn shifts(&self) -> &HashMap<String, ShiftConfig> {
        &self.shifts
    }
}
