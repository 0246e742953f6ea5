//! Error types for the pdf2jpg library.
//!
//! There is a single fatal error enum: the pipeline is strictly sequential
//! (resolve → render → write) and every failure aborts the run. Rasterisation
//! fully precedes writing, so a render failure never leaves page files behind;
//! a write failure mid-loop leaves the already-written pages on disk without
//! cleanup — callers that care can delete the output directory themselves.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2jpg library.
#[derive(Debug, Error)]
pub enum Pdf2JpgError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it via ExtractionConfig::builder().password(..).")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// pdfium returned an error while rasterising a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create the output directory.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not encode or write a page image file.
    #[error("Failed to write page {page} to '{path}': {detail}")]
    PageWriteFailed {
        page: usize,
        path: PathBuf,
        detail: String,
    },

    /// Overwrite protection is enabled and the target file already exists.
    #[error("Refusing to overwrite existing file '{path}'\nRemove it or enable overwrite in ExtractionConfig.")]
    WouldOverwrite { path: PathBuf },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
pdf2jpg needs the pdfium shared library at runtime. You can:\n\
  • Place libpdfium next to the executable or in the working directory.\n\
  • Install pdfium system-wide so the dynamic linker can find it.\n"
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_names_path() {
        let e = Pdf2JpgError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert!(e.to_string().contains("/tmp/missing.pdf"));
    }

    #[test]
    fn render_failed_names_page() {
        let e = Pdf2JpgError::RenderFailed {
            page: 3,
            detail: "bitmap allocation".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 3"), "got: {msg}");
        assert!(msg.contains("bitmap allocation"));
    }

    #[test]
    fn page_write_failed_names_page_and_path() {
        let e = Pdf2JpgError::PageWriteFailed {
            page: 7,
            path: PathBuf::from("out/page_7.jpg"),
            detail: "disk full".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 7"));
        assert!(msg.contains("page_7.jpg"));
    }

    #[test]
    fn would_overwrite_mentions_remedy() {
        let e = Pdf2JpgError::WouldOverwrite {
            path: PathBuf::from("out/page_1.jpg"),
        };
        assert!(e.to_string().contains("overwrite"));
    }

    #[test]
    fn output_dir_failed_carries_source() {
        use std::error::Error as _;
        let e = Pdf2JpgError::OutputDirFailed {
            path: PathBuf::from("/proc/nope"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.source().is_some());
    }
}
