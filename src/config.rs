//! Configuration types for PDF-to-JPEG extraction.
//!
//! All behaviour is controlled through [`ExtractionConfig`], built via its
//! [`ExtractionConfigBuilder`]. The output format (JPEG), file naming
//! (`page_<n>.jpg`) and render target size are deliberately *not*
//! configurable — they are fixed properties of this tool, and keeping them
//! out of the config means two runs over the same document are always
//! directly comparable.

use crate::error::Pdf2JpgError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Maximum rendered image dimension (width or height) in pixels.
///
/// A safety cap independent of page size. Rendering an A0 poster at print
/// resolution could produce a 13 000 × 18 000 px bitmap and exhaust memory.
/// Capping the longest edge keeps pdfium's allocation bounded regardless of
/// the physical page dimensions.
pub(crate) const MAX_RENDERED_PIXELS: i32 = 2000;

/// JPEG encoding quality used for every page file.
pub(crate) const JPEG_QUALITY: u8 = 80;

/// Configuration for a PDF-to-JPEG extraction run.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2jpg::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .overwrite(false)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Overwrite existing page files silently. Default: true.
    ///
    /// The default matches the behaviour callers expect from re-running the
    /// tool against the same output directory: the run is idempotent and the
    /// files are simply replaced. Set to `false` to get a
    /// [`Pdf2JpgError::WouldOverwrite`] error instead, which aborts the run
    /// before the conflicting file is touched.
    pub overwrite: bool,

    /// Optional per-page progress callback.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            password: None,
            overwrite: true,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("overwrite", &self.overwrite)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn overwrite(mut self, v: bool) -> Self {
        self.config.overwrite = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, Pdf2JpgError> {
        if let Some(ref pwd) = self.config.password {
            if pwd.is_empty() {
                return Err(Pdf2JpgError::InvalidConfig(
                    "Password must not be empty; omit it for unencrypted PDFs".into(),
                ));
            }
        }
        Ok(self.config)
    }
}

/// Compute the output file name for a 0-based page index.
///
/// Page 0 of the document becomes `page_1.jpg`: file names are 1-indexed and
/// page-order preserving, so `page_<n>.jpg` always holds page `n` of the
/// source document.
pub fn page_file_name(index: usize) -> String {
    format!("page_{}.jpg", index + 1)
}
