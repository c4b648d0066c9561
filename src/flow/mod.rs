mod state;
mod submission_error;
mod submission_flow;
mod verdict;

pub use state::SubmissionState;
pub use submission_error::SubmissionError;
pub use submission_flow::{AttendanceSubmissionFlow, FlowSettings};
