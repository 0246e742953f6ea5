//! Input resolution: validate a user-supplied path before handing it to pdfium.
//!
//! ## Why check the magic bytes?
//!
//! pdfium's load error for a non-PDF file is an opaque "format error". Reading
//! the first four bytes up front lets us return a precise [`Pdf2JpgError`]
//! naming the offending file and what was found instead, before the
//! rasteriser is even bound.

use crate::error::Pdf2JpgError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a local file path, validating existence and PDF magic bytes.
pub fn resolve_input(path_str: impl AsRef<Path>) -> Result<PathBuf, Pdf2JpgError> {
    let path = path_str.as_ref().to_path_buf();

    if !path.exists() {
        return Err(Pdf2JpgError::FileNotFound { path });
    }

    // Check read permission by attempting to open
    match std::fs::File::open(&path) {
        Ok(mut f) => {
            // Verify PDF magic bytes
            use std::io::Read;
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(Pdf2JpgError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2JpgError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(Pdf2JpgError::FileNotFound { path });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let err = resolve_input("/definitely/not/a/real/file.pdf").unwrap_err();
        assert!(matches!(err, Pdf2JpgError::FileNotFound { .. }));
    }

    #[test]
    fn non_pdf_content_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"GIF89a not a pdf")
            .unwrap();

        let err = resolve_input(&path).unwrap_err();
        match err {
            Pdf2JpgError::NotAPdf { magic, .. } => assert_eq!(&magic, b"GIF8"),
            other => panic!("expected NotAPdf, got {other:?}"),
        }
    }

    #[test]
    fn pdf_magic_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("real.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"%PDF-1.7\n%rest of file")
            .unwrap();

        let resolved = resolve_input(&path).expect("valid magic must resolve");
        assert_eq!(resolved, path);
    }

    #[test]
    fn short_file_passes_magic_check() {
        // A file shorter than 4 bytes cannot fail the magic check here;
        // pdfium reports it as corrupt downstream.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.pdf");
        std::fs::File::create(&path).unwrap().write_all(b"%P").unwrap();
        assert!(resolve_input(&path).is_ok());
    }
}
