//! Output types: what an extraction run produced and how long it took.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single page image written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPage {
    /// 1-indexed page number, matching the file name (`page_<n>.jpg`).
    pub page_num: usize,
    /// Full path of the written JPEG file.
    pub path: PathBuf,
    /// Rendered image width in pixels.
    pub width: u32,
    /// Rendered image height in pixels.
    pub height: u32,
    /// Size of the encoded JPEG file in bytes.
    pub bytes_written: u64,
}

/// Timing and count statistics for an extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Pages in the source document.
    pub total_pages: usize,
    /// Page files actually written. Equal to `total_pages` on success —
    /// a partial count only ever appears in logs from an aborted run.
    pub saved_pages: usize,
    /// Wall-clock time spent rasterising, in milliseconds.
    pub render_duration_ms: u64,
    /// Wall-clock time spent encoding and writing files, in milliseconds.
    pub write_duration_ms: u64,
    /// Total wall-clock time for the run, in milliseconds.
    pub total_duration_ms: u64,
}

/// Result of a successful extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// One entry per written page, in page order.
    pub pages: Vec<SavedPage>,
    /// The directory the page files were written into.
    pub output_dir: PathBuf,
    /// Run statistics.
    pub stats: ExtractionStats,
}

/// Document metadata extracted from the PDF without rendering any pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub modification_date: Option<String>,
    pub page_count: usize,
    pub pdf_version: String,
}
