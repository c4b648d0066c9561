use crate::capture::Frame;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, info};

/// Grants access to a video input device.
#[async_trait]
pub trait CameraSource: Debug + Send + Sync {
    async fn open(&self) -> Result<CameraStream, CameraError>;
}

pub trait VideoTrack: Debug + Send + Sync {
    fn label(&self) -> &str;

    /// The current frame, `None` while the track is not producing frames.
    fn frame(&self) -> Option<Frame>;

    fn is_live(&self) -> bool;

    fn stop(&mut self);
}

/// A live camera stream. Every track is stopped when the stream is dropped.
#[derive(Debug)]
pub struct CameraStream {
    tracks: Vec<Box<dyn VideoTrack>>,
}

impl CameraStream {
    pub fn new(tracks: Vec<Box<dyn VideoTrack>>) -> Self {
        CameraStream { tracks }
    }

    /// The frame of the first live track that has one.
    pub fn current_frame(&self) -> Option<Frame> {
        self.tracks
            .iter()
            .filter(|track| track.is_live())
            .find_map(|track| track.frame().filter(|frame| !frame.is_empty()))
    }

    pub fn stop(&mut self) {
        for track in self.tracks.iter_mut().filter(|track| track.is_live()) {
            debug!("📷 Stopping track '{}'", track.label());
            track.stop();
        }
    }
}

impl Drop for CameraStream {
    fn drop(&mut self) {
        if self.tracks.iter().any(|track| track.is_live()) {
            self.stop();
            info!("📷 Released camera");
        }
    }
}

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Image(#[from] image::ImageError),
}
