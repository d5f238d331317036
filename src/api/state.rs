//! Application state for the Timesheet Reconstruction Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ShiftCatalog;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded shift catalog.
#[derive(Clone)]
pub struct AppState {
    /// The loaded shift catalog.
    catalog: Arc<ShiftCatalog>,
}

impl AppState {
    /// Creates a new application state with the given shift catalog.
    pub fn new(catalog: ShiftCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
