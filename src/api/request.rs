//! Request types for the Timesheet Reconstruction Engine API.
//!
//! This module defines the JSON request structures for the `/report`
//! endpoint.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{
    EmployeeProfile, EmployeeStatus, PunchEvent, PunchKind, PunchSource, ReportPeriod,
};

/// Request body for the `/report` endpoint.
///
/// Carries everything the engine needs: the employee descriptor, the
/// catalog code of their shift, the date range, and the punch events the
/// external store already fetched for that employee and range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// Catalog code of the shift the employee is assigned to.
    pub shift_code: String,
    /// The date range for the report.
    pub period: PeriodRequest,
    /// Punch events within the range, ordered by timestamp.
    #[serde(default)]
    pub punches: Vec<PunchRequest>,
}

/// Employee information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's full name.
    pub full_name: String,
    /// Unique registration number.
    pub registration_number: String,
    /// Department label.
    pub department: String,
    /// Role label.
    pub role: String,
    /// Employment status.
    #[serde(default = "default_status")]
    pub status: EmployeeStatus,
}

fn default_status() -> EmployeeStatus {
    EmployeeStatus::Active
}

/// Date range information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

/// Punch event information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// When the punch happened (RFC 3339 with offset).
    pub timestamp: DateTime<FixedOffset>,
    /// The kind of time-clock action.
    pub kind: PunchKind,
    /// Where the punch was produced.
    #[serde(default = "default_source")]
    pub source: PunchSource,
    /// Reviewer-supplied reason, required for manual adjustments.
    #[serde(default)]
    pub justification: Option<String>,
}

fn default_source() -> PunchSource {
    PunchSource::Terminal
}

impl From<EmployeeRequest> for EmployeeProfile {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeProfile {
            full_name: req.full_name,
            registration_number: req.registration_number,
            department: req.department,
            role: req.role,
            status: req.status,
        }
    }
}

impl From<PeriodRequest> for ReportPeriod {
    fn from(req: PeriodRequest) -> Self {
        ReportPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl PunchRequest {
    /// Converts the request punch into a domain event for the employee
    /// the report is about.
    pub fn into_event(self, employee_id: &str) -> PunchEvent {
        PunchEvent {
            employee_id: employee_id.to_string(),
            timestamp: self.timestamp,
            kind: self.kind,
            source: self.source,
            justification: self.justification,
        }
    }
}
