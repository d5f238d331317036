//! HTTP API module for the Timesheet Reconstruction Engine.
//!
//! This module provides the REST endpoint for generating timesheet
//! reports from pre-fetched punch events.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::ApiError;
pub use state::AppState;
