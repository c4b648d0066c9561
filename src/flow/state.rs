use crate::domain::SubmissionStatus;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    LocatingPosition,
    CapturingImage { distance: f64 },
    Submitting { distance: f64 },
    Resolved(SubmissionStatus),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        !matches!(self, SubmissionState::Idle | SubmissionState::Resolved(_))
    }
}

impl Display for SubmissionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "idle"),
            SubmissionState::Validating => write!(f, "validating..."),
            SubmissionState::LocatingPosition => write!(f, "locating position..."),
            SubmissionState::CapturingImage { .. } => write!(f, "capturing image..."),
            SubmissionState::Submitting { .. } => write!(f, "loading..."),
            SubmissionState::Resolved(status) => write!(f, "{}", status),
        }
    }
}
