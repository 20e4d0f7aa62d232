//! Convenience helpers for loading and saving signatures via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{SampleBuffer, SampleView};
use crate::util::{SigMatchError, SigMatchResult};
use std::path::Path;

/// Creates a borrowed view from a grayscale image buffer.
pub fn view_from_gray_image(img: &image::GrayImage) -> SigMatchResult<SampleView<'_>> {
    SampleView::from_slice(img.as_raw(), img.width(), img.height())
}

/// Creates an owned signature from a grayscale image buffer.
pub fn buffer_from_gray_image(img: &image::GrayImage) -> SigMatchResult<SampleBuffer> {
    SampleBuffer::new(img.as_raw().clone(), img.width(), img.height())
}

/// Creates an owned signature from a dynamic image, converting to 8-bit luma.
pub fn buffer_from_dynamic_image(img: &image::DynamicImage) -> SigMatchResult<SampleBuffer> {
    let gray = img.to_luma8();
    buffer_from_gray_image(&gray)
}

/// Loads an image from disk and converts it to a grayscale signature.
pub fn load_signature<P: AsRef<Path>>(path: P) -> SigMatchResult<SampleBuffer> {
    let img = image::open(path).map_err(|err| SigMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    buffer_from_dynamic_image(&img)
}

/// Writes a signature to disk as a grayscale image; the format follows the extension.
pub fn save_signature<P: AsRef<Path>>(signature: &SampleBuffer, path: P) -> SigMatchResult<()> {
    let img = image::GrayImage::from_raw(
        signature.width(),
        signature.height(),
        signature.as_slice().to_vec(),
    )
    .ok_or(SigMatchError::LengthMismatch {
        needed: signature.width() as usize * signature.height() as usize,
        got: signature.as_slice().len(),
    })?;
    img.save(path).map_err(|err| SigMatchError::ImageIo {
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{load_signature, save_signature};
    use crate::image::SampleBuffer;

    #[test]
    fn png_round_trip_preserves_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sig.png");
        let data: Vec<u8> = (0u8..12).map(|v| v * 20).collect();
        let sig = SampleBuffer::new(data, 4, 3).unwrap();

        save_signature(&sig, &path).unwrap();
        let loaded = load_signature(&path).unwrap();
        assert_eq!(loaded, sig);
    }

    #[test]
    fn missing_file_reports_image_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_signature(dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, crate::SigMatchError::ImageIo { .. }));
    }
}
