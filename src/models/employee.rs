//! Employee profile model and related types.

use serde::{Deserialize, Serialize};

/// Employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and expected to punch.
    Active,
    /// Employment suspended; punches are not expected.
    Inactive,
    /// Temporarily away on leave.
    OnLeave,
    /// No longer employed.
    Terminated,
}

/// Descriptive employee fields carried through to the report.
///
/// The engine never interprets these fields; they identify whose
/// timesheet a report describes. Status checks (only active employees
/// may be reported on) happen at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// The employee's full name.
    pub full_name: String,
    /// Unique registration number (the time clock's employee key).
    pub registration_number: String,
    /// Department label.
    pub department: String,
    /// Role label.
    pub role: String,
    /// Employment status.
    pub status: EmployeeStatus,
}

impl EmployeeProfile {
    /// Returns true if the employee is currently active.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
