mod attendance_record;
mod attendance_type;
mod coordinate;
mod submission_result;

pub use attendance_record::AttendanceRecord;
pub use attendance_type::AttendanceType;
pub use coordinate::Coordinate;
pub use submission_result::{SubmissionResult, SubmissionStatus};
