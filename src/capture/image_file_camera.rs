use crate::capture::{CameraError, CameraSource, CameraStream, Frame, VideoTrack};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, instrument};

/// A camera backed by a still image on disk, for hosts without a capture device.
#[derive(Debug)]
pub struct ImageFileCamera {
    path: PathBuf,
}

impl ImageFileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ImageFileCamera { path: path.into() }
    }
}

#[async_trait]
impl CameraSource for ImageFileCamera {
    #[instrument(skip_all)]
    async fn open(&self) -> Result<CameraStream, CameraError> {
        info!("📷 Opening camera '{}'...", self.path.display());
        if !self.path.is_file() {
            return Err(CameraError::Unavailable(format!("no image found at '{}'", self.path.display())));
        }

        let path = self.path.clone();
        let pixels = tokio::task::spawn_blocking(move || image::open(path))
            .await
            .map_err(|e| CameraError::Unavailable(e.to_string()))??
            .to_rgb8();
        info!("📷 Opening camera '{}'... OK, {}x{}", self.path.display(), pixels.width(), pixels.height());

        let track = StillTrack {
            label: self.path.display().to_string(),
            frame: Frame::new(pixels),
            live: true,
        };
        Ok(CameraStream::new(vec![Box::new(track)]))
    }
}

#[derive(Debug)]
struct StillTrack {
    label: String,
    frame: Frame,
    live: bool,
}

impl VideoTrack for StillTrack {
    fn label(&self) -> &str {
        &self.label
    }

    fn frame(&self) -> Option<Frame> {
        self.live.then(|| self.frame.clone())
    }

    fn is_live(&self) -> bool {
        self.live
    }

    fn stop(&mut self) {
        self.live = false;
    }
}
