//! Configuration types for the shift catalog.
//!
//! This module contains the strongly-typed structures deserialized from
//! the shift catalog YAML file.

use chrono::NaiveTime;
use serde::Deserialize;
use std::collections::HashMap;

/// Serde helper for `"HH:MM"` times as the catalog file writes them.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| de::Error::custom(format!("invalid time '{raw}': {e}")))
    }
}

/// One named shift in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftDefinition {
    /// The human-readable name of the shift.
    pub name: String,
    /// Scheduled start of the working day, `"HH:MM"`.
    #[serde(with = "hhmm")]
    pub scheduled_start: NaiveTime,
    /// Scheduled end of the working day, `"HH:MM"`.
    #[serde(with = "hhmm")]
    pub scheduled_end: NaiveTime,
    /// Expected break duration in minutes.
    pub break_minutes: u32,
    /// Minutes of lateness tolerated before lateness is counted.
    pub grace_minutes: u32,
}

/// Shift catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftCatalogConfig {
    /// Map of shift code to shift definition.
    pub shifts: HashMap<String, ShiftDefinition>,
}
