mod attendance_response;
mod attendance_service;
mod client;

pub use attendance_response::AttendanceResponse;
pub use attendance_service::{AttendanceService, HttpAttendanceService};
pub use client::{ServiceError, new_client};
