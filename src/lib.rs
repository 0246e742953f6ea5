//! # pdf2jpg
//!
//! Convert a PDF document into a sequence of per-page JPEG images.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input   validate the local file (%PDF magic bytes)
//!  ├─ 2. Render  rasterise every page via pdfium into memory
//!  └─ 3. Write   persist each page as <output_dir>/page_<n>.jpg (1-indexed)
//! ```
//!
//! The pipeline is single-threaded, synchronous, and strictly sequential:
//! rendering fully completes before the first file is written, and pages are
//! written in document order. The number of files written always equals the
//! page count of the source document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2jpg::{extract, ExtractionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::default();
//!     let output = extract("THE-CAT-IN-THE-HAT.pdf", "pdf_images", &config)?;
//!     println!("{} pages extracted to {}", output.stats.saved_pages,
//!         output.output_dir.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2jpg` binary (anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pdf2jpg = { version = "0.1", default-features = false }
//! ```
//!
//! ## Runtime requirement
//!
//! Rasterisation is delegated to the pdfium shared library, resolved at
//! startup from the working directory or the system library path. A missing
//! library surfaces as [`Pdf2JpgError::PdfiumBindingFailed`] with setup hints.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{page_file_name, ExtractionConfig, ExtractionConfigBuilder};
pub use error::Pdf2JpgError;
pub use extract::{extract, extract_from_bytes, inspect};
pub use output::{DocumentMetadata, ExtractionOutput, ExtractionStats, SavedPage};
pub use progress::{ExtractionProgressCallback, NoopProgressCallback, ProgressCallback};
