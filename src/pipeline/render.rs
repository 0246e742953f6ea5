//! PDF rasterisation: render every page to a `DynamicImage` via pdfium.
//!
//! ## Why materialise all pages before writing?
//!
//! The pipeline rasterises the whole document into a `Vec` before a single
//! file is written. A corrupt page or an exhausted rasteriser therefore
//! aborts the run with an empty output directory rather than a partial one —
//! the only partial state a failed run can leave behind is from the write
//! stage itself.
//!
//! ## Why cap pixels, not DPI?
//!
//! Page sizes vary wildly: an A0 poster at print DPI would produce a
//! 12,000 × 17,000 px image. Capping the longest edge keeps memory bounded
//! regardless of physical page size.

use crate::config::{ExtractionConfig, MAX_RENDERED_PIXELS};
use crate::error::Pdf2JpgError;
use crate::output::DocumentMetadata;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Bind to a pdfium library: first one shipped next to the executable or in
/// the working directory, then the system-wide install.
fn bind_pdfium() -> Result<Pdfium, Pdf2JpgError> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Pdf2JpgError::PdfiumBindingFailed(format!("{e:?}")))?;
    Ok(Pdfium::new(bindings))
}

/// Classify a pdfium load error: password problems get their own variants so
/// the message can tell the user what to do.
fn classify_load_error(
    e: PdfiumError,
    pdf_path: &Path,
    password: Option<&str>,
) -> Pdf2JpgError {
    let err_str = format!("{e:?}");
    if err_str.contains("Password") || err_str.contains("password") {
        if password.is_some() {
            Pdf2JpgError::WrongPassword {
                path: pdf_path.to_path_buf(),
            }
        } else {
            Pdf2JpgError::PasswordRequired {
                path: pdf_path.to_path_buf(),
            }
        }
    } else {
        Pdf2JpgError::CorruptPdf {
            path: pdf_path.to_path_buf(),
            detail: err_str,
        }
    }
}

/// Rasterise every page of a PDF into an ordered, fully materialised vector.
///
/// # Returns
/// A vector of `(page_index_0based, DynamicImage)` tuples in page order.
pub fn render_pages(
    pdf_path: &Path,
    config: &ExtractionConfig,
) -> Result<Vec<(usize, DynamicImage)>, Pdf2JpgError> {
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(pdf_path, config.password.as_deref())
        .map_err(|e| classify_load_error(e, pdf_path, config.password.as_deref()))?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    let render_config = PdfRenderConfig::new()
        .set_target_width(MAX_RENDERED_PIXELS)
        .set_maximum_height(MAX_RENDERED_PIXELS);

    let mut results = Vec::with_capacity(total_pages);

    for idx in 0..total_pages {
        let page = pages
            .get(idx as u16)
            .map_err(|e| Pdf2JpgError::RenderFailed {
                page: idx + 1,
                detail: format!("{e:?}"),
            })?;

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| Pdf2JpgError::RenderFailed {
                page: idx + 1,
                detail: format!("{e:?}"),
            })?;

        let image = bitmap.as_image();
        debug!(
            "Rendered page {} → {}x{} px",
            idx + 1,
            image.width(),
            image.height()
        );

        results.push((idx, image));
    }

    Ok(results)
}

/// Extract document metadata from a PDF without rendering any pages.
pub fn extract_metadata(
    pdf_path: &Path,
    password: Option<&str>,
) -> Result<DocumentMetadata, Pdf2JpgError> {
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(pdf_path, password)
        .map_err(|e| classify_load_error(e, pdf_path, password))?;

    let metadata = document.metadata();
    let pages = document.pages();

    let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
        metadata.get(tag).and_then(|t| {
            let v = t.value().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        })
    };

    Ok(DocumentMetadata {
        title: get_meta(PdfDocumentMetadataTagType::Title),
        author: get_meta(PdfDocumentMetadataTagType::Author),
        subject: get_meta(PdfDocumentMetadataTagType::Subject),
        creator: get_meta(PdfDocumentMetadataTagType::Creator),
        producer: get_meta(PdfDocumentMetadataTagType::Producer),
        creation_date: get_meta(PdfDocumentMetadataTagType::CreationDate),
        modification_date: get_meta(PdfDocumentMetadataTagType::ModificationDate),
        page_count: pages.len() as usize,
        pdf_version: format!("{:?}", document.version()),
    })
}
