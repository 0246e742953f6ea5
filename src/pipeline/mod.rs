//! Pipeline stages for PDF-to-JPEG extraction.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch rendering backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ render ──▶ write
//! (path)    (pdfium)   (JPEG files)
//! ```
//!
//! 1. [`input`]  — validate the user-supplied path and its PDF magic bytes
//! 2. [`render`] — rasterise every page into memory; all pages are
//!    materialised before any write begins
//! 3. [`write`]  — create the output directory and persist each page as
//!    `page_<n>.jpg`

pub mod input;
pub mod render;
pub mod write;
