use crate::capture::FrameError;
use crate::location::LocationError;
use crate::service::ServiceError;
use thiserror::Error;
use tokio::task::JoinError;

/// Every way an attempt can end without an accepted record. The display text is what the user sees.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("name required")]
    NameRequired,
    #[error("geolocation unsupported")]
    GeolocationUnsupported,
    #[error("{0}")]
    Location(#[from] LocationError),
    #[error("camera unavailable")]
    CameraUnavailable,
    #[error("{0}")]
    Frame(#[from] FrameError),
    #[error("image capture interrupted: {0}")]
    CaptureInterrupted(#[from] JoinError),
    #[error("error: {0}")]
    Transport(#[from] ServiceError),
    #[error("outside office area")]
    OutsideOffice,
    #[error("failed to save attendance")]
    SaveFailed,
    #[error("submission already in progress")]
    Busy,
}
