//! Shift catalog configuration for the Timesheet Reconstruction Engine.
//!
//! The catalog is the in-process face of the external shift configuration
//! store: named shift definitions loaded from YAML, resolved by code when
//! a report is requested.

mod loader;
mod types;

pub use loader::ShiftCatalog;
pub use types::{ShiftCatalogConfig, ShiftDefinition};
