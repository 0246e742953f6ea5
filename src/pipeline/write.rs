//! Output persistence: create the output directory and write page JPEGs.
//!
//! ## Why encode to a buffer first?
//!
//! Encoding into memory and writing the finished bytes in one `fs::write`
//! call means an encoding failure never leaves a truncated file on disk,
//! and gives us the exact byte count for the run statistics for free.

use crate::config::{page_file_name, JPEG_QUALITY};
use crate::error::Pdf2JpgError;
use crate::output::SavedPage;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::path::Path;
use tracing::debug;

/// Create the output directory if it does not already exist.
///
/// Idempotent: an existing directory is reused without error. A failure
/// (permissions, invalid path) is fatal — nothing has been written yet.
pub fn ensure_output_dir(dir: &Path) -> Result<(), Pdf2JpgError> {
    std::fs::create_dir_all(dir).map_err(|e| Pdf2JpgError::OutputDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Encode one rendered page as JPEG and write it to `<output_dir>/page_<n>.jpg`.
///
/// `index` is the 0-based page index; the file name is 1-indexed. Existing
/// files are overwritten silently unless `overwrite` is false.
pub fn save_page(
    img: &DynamicImage,
    index: usize,
    output_dir: &Path,
    overwrite: bool,
) -> Result<SavedPage, Pdf2JpgError> {
    let path = output_dir.join(page_file_name(index));
    let page_num = index + 1;

    if !overwrite && path.exists() {
        return Err(Pdf2JpgError::WouldOverwrite { path });
    }

    // JPEG has no alpha channel; pdfium bitmaps come out RGBA8.
    let rgb = img.to_rgb8();

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| Pdf2JpgError::PageWriteFailed {
            page: page_num,
            path: path.clone(),
            detail: format!("JPEG encoding failed: {e}"),
        })?;

    std::fs::write(&path, &buf).map_err(|e| Pdf2JpgError::PageWriteFailed {
        page: page_num,
        path: path.clone(),
        detail: e.to_string(),
    })?;

    debug!(
        "Saved page {} → {} ({} bytes)",
        page_num,
        path.display(),
        buf.len()
    );

    Ok(SavedPage {
        page_num,
        path,
        width: img.width(),
        height: img.height(),
        bytes_written: buf.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid_image(w: u32, h: u32, px: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, px))
    }

    #[test]
    fn ensure_output_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pdf_images");

        ensure_output_dir(&out).expect("first create must succeed");
        assert!(out.is_dir());
        ensure_output_dir(&out).expect("existing directory must be a no-op");
    }

    #[test]
    fn save_page_writes_one_indexed_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let img = solid_image(16, 16, Rgba([255, 0, 0, 255]));

        let saved = save_page(&img, 0, dir.path(), true).expect("save must succeed");
        assert_eq!(saved.page_num, 1);
        assert!(saved.path.ends_with("page_1.jpg"));
        assert_eq!((saved.width, saved.height), (16, 16));
        assert!(saved.bytes_written > 0);

        let bytes = std::fs::read(&saved.path).unwrap();
        assert_eq!(bytes.len() as u64, saved.bytes_written);
        // JPEG SOI marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn save_page_overwrites_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let red = solid_image(8, 8, Rgba([255, 0, 0, 255]));
        let blue = solid_image(8, 8, Rgba([0, 0, 255, 255]));

        let first = save_page(&red, 2, dir.path(), true).unwrap();
        let second = save_page(&blue, 2, dir.path(), true).expect("overwrite must succeed");
        assert_eq!(first.path, second.path);
        assert!(first.path.ends_with("page_3.jpg"));
    }

    #[test]
    fn save_page_refuses_overwrite_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let img = solid_image(8, 8, Rgba([0, 255, 0, 255]));

        save_page(&img, 0, dir.path(), false).expect("first write must succeed");
        let err = save_page(&img, 0, dir.path(), false).unwrap_err();
        assert!(matches!(err, Pdf2JpgError::WouldOverwrite { .. }));
    }

    #[test]
    fn save_page_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let img = solid_image(8, 8, Rgba([0, 0, 0, 255]));
        let missing = dir.path().join("never_created");

        let err = save_page(&img, 0, &missing, true).unwrap_err();
        assert!(matches!(err, Pdf2JpgError::PageWriteFailed { page: 1, .. }));
    }
}
