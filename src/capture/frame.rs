use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::{RgbImage, imageops};
use thiserror::Error;

pub const JPEG_QUALITY: u8 = 92;

/// A still frame taken from a video track, at the track's native resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pixels: RgbImage,
}

impl Frame {
    pub fn new(pixels: RgbImage) -> Self {
        Frame { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn to_jpeg(&self) -> Result<Vec<u8>, FrameError> {
        if self.is_empty() {
            return Err(FrameError::Empty);
        }

        let mut canvas = RgbImage::new(self.width(), self.height());
        imageops::replace(&mut canvas, &self.pixels, 0, 0);

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode_image(&canvas)?;
        Ok(jpeg)
    }

    /// Encodes the frame as a `data:image/jpeg;base64,...` URI.
    pub fn to_data_uri(&self) -> Result<String, FrameError> {
        let jpeg = self.to_jpeg()?;
        Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg)))
    }
}

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("frame has no pixels")]
    Empty,
    #[error("unable to encode frame: {0}")]
    Encode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn to_jpeg_keeps_the_native_resolution() -> Result<(), Box<dyn std::error::Error>> {
        let frame = Frame::new(RgbImage::from_pixel(64, 48, Rgb([200, 30, 30])));

        let jpeg = frame.to_jpeg()?;
        let decoded = image::load_from_memory_with_format(&jpeg, image::ImageFormat::Jpeg)?;

        assert_eq!((decoded.width(), decoded.height()), (64, 48));
        Ok(())
    }

    #[test]
    fn to_data_uri_contains_a_base64_jpeg() -> Result<(), Box<dyn std::error::Error>> {
        let frame = Frame::new(RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])));

        let uri = frame.to_data_uri()?;
        let payload = uri.strip_prefix("data:image/jpeg;base64,").ok_or("missing data URI prefix")?;
        let jpeg = STANDARD.decode(payload)?;

        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
        Ok(())
    }

    #[test]
    fn to_jpeg_fails_for_an_empty_frame() {
        let frame = Frame::new(RgbImage::new(0, 0));

        assert!(matches!(frame.to_jpeg(), Err(FrameError::Empty)));
    }
}
