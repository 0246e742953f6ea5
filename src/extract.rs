//! Extraction entry points.
//!
//! The pipeline is deliberately eager and sequential: every page is
//! rasterised into memory before the first file is written, then pages are
//! persisted one by one in page order. There is no retry, no partial-state
//! cleanup, and no concurrency — a failed run terminates with the first
//! error it hits, leaving whatever files were already written on disk.

use crate::config::ExtractionConfig;
use crate::error::Pdf2JpgError;
use crate::output::{DocumentMetadata, ExtractionOutput, ExtractionStats, SavedPage};
use crate::pipeline::{input, render, write};
use std::io::Write as _;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a PDF file into per-page JPEG images.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input_path` — local path to a PDF file
/// * `output_dir` — directory to write `page_1.jpg` … `page_N.jpg` into;
///   created if it does not exist
/// * `config`     — extraction configuration
///
/// # Returns
/// `Ok(ExtractionOutput)` with one [`SavedPage`] per document page, in order.
///
/// # Errors
/// Every failure is fatal: bad input path, unreadable/corrupt/encrypted PDF,
/// missing pdfium library, output-directory or file-write failure. Pages
/// written before a write failure are left on disk.
pub fn extract(
    input_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, Pdf2JpgError> {
    let total_start = Instant::now();
    let input_path = input_path.as_ref();
    let output_dir = output_dir.as_ref();
    info!("Starting extraction: {}", input_path.display());

    // ── Step 1: Resolve input ────────────────────────────────────────────
    let pdf_path = input::resolve_input(input_path)?;

    // ── Step 2: Ensure output directory ──────────────────────────────────
    write::ensure_output_dir(output_dir)?;

    // ── Step 3: Rasterise all pages ──────────────────────────────────────
    let render_start = Instant::now();
    let rendered = match render::render_pages(&pdf_path, config) {
        Ok(r) => r,
        Err(e) => {
            notify_error(config, 0, &e);
            return Err(e);
        }
    };
    let render_duration_ms = render_start.elapsed().as_millis() as u64;
    let total_pages = rendered.len();
    info!("Rendered {} pages in {}ms", total_pages, render_duration_ms);

    if let Some(ref cb) = config.progress_callback {
        cb.on_extract_start(&pdf_path, total_pages);
    }

    // ── Step 4: Write each page in order ─────────────────────────────────
    let write_start = Instant::now();
    let mut pages: Vec<SavedPage> = Vec::with_capacity(total_pages);

    for (idx, img) in &rendered {
        let saved = match write::save_page(img, *idx, output_dir, config.overwrite) {
            Ok(s) => s,
            Err(e) => {
                notify_error(config, pages.len(), &e);
                return Err(e);
            }
        };

        if let Some(ref cb) = config.progress_callback {
            cb.on_page_saved(saved.page_num, total_pages, &saved.path);
        }
        pages.push(saved);
    }
    let write_duration_ms = write_start.elapsed().as_millis() as u64;
    debug!("Wrote {} files in {}ms", pages.len(), write_duration_ms);

    // ── Step 5: Assemble stats ───────────────────────────────────────────
    let stats = ExtractionStats {
        total_pages,
        saved_pages: pages.len(),
        render_duration_ms,
        write_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Extraction complete: {} pages → {} ({}ms total)",
        stats.saved_pages,
        output_dir.display(),
        stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_extract_complete(stats.saved_pages, output_dir);
    }

    Ok(ExtractionOutput {
        pages,
        output_dir: output_dir.to_path_buf(),
        stats,
    })
}

/// Convert PDF bytes in memory into per-page JPEG images.
///
/// Avoids the need for the caller to create a file first. Internally the
/// library writes `bytes` to a managed [`tempfile`] and cleans it up
/// automatically on return or panic. This is the recommended API when PDF
/// data comes from a database or an in-memory buffer rather than a file on
/// disk.
pub fn extract_from_bytes(
    bytes: &[u8],
    output_dir: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, Pdf2JpgError> {
    let mut tmp = tempfile::NamedTempFile::new()
        .map_err(|e| Pdf2JpgError::Internal(format!("tempfile: {e}")))?;
    tmp.write_all(bytes)
        .map_err(|e| Pdf2JpgError::Internal(format!("tempfile write: {e}")))?;
    // `tmp` is dropped (and the file deleted) when `extract` returns
    extract(tmp.path(), output_dir, config)
}

/// Extract PDF metadata without rendering or writing anything.
pub fn inspect(input_path: impl AsRef<Path>) -> Result<DocumentMetadata, Pdf2JpgError> {
    let pdf_path = input::resolve_input(input_path)?;
    render::extract_metadata(&pdf_path, None)
}

fn notify_error(config: &ExtractionConfig, saved_pages: usize, err: &Pdf2JpgError) {
    if let Some(ref cb) = config.progress_callback {
        cb.on_extract_error(saved_pages, err.to_string());
    }
}
