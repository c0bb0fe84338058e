//! Data Models
//!
//! One file per entity; each entity carries Create/Update payload structs
//! alongside the row type.

pub mod attendance;
pub mod compliance;
pub mod employee;
pub mod leave_request;
pub mod payroll;
pub mod performance_review;
pub mod user;

// Re-exports
pub use attendance::{Attendance, AttendanceCreate, AttendanceUpdate};
pub use compliance::{
    CompliancePolicy, CompliancePolicyCreate, CompliancePolicyUpdate, CompliancePolicyWithStatus,
    EmployeeCompliance,
};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use leave_request::{LeaveCreate, LeaveFilter, LeaveRequest, LeaveStatus, LeaveUpdate};
pub use payroll::{Payroll, PayrollCreate, PayrollFilter};
pub use performance_review::{
    PerformanceReview, PerformanceReviewCreate, PerformanceReviewUpdate,
};
pub use user::{Role, User, UserCreate, UserUpdate};
