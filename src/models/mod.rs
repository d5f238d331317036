//! Domain models for the Timesheet Reconstruction Engine.

mod employee;
mod period;
mod punch;
mod report;
mod shift;

pub use employee::{EmployeeProfile, EmployeeStatus};
pub use period::ReportPeriod;
pub use punch::{PunchEvent, PunchKind, PunchSource};
pub use report::{DayRecord, PeriodReport, PeriodTotals, PunchEntry};
pub use shift::ShiftConfig;
