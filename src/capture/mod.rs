mod camera;
mod frame;
mod image_file_camera;

#[cfg(test)]
pub use camera::fakes;
pub use camera::{CameraError, CameraSource, CameraStream, VideoTrack};
pub use frame::{Frame, FrameError};
pub use image_file_camera::ImageFileCamera;
