//! Progress-callback trait for per-page extraction events.
//!
//! Inject an [`Arc<dyn ExtractionProgressCallback>`] via
//! [`crate::config::ExtractionConfigBuilder::progress_callback`] to receive
//! events as the pipeline writes each page.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a terminal progress bar, a log file, or a GUI without the
//! library knowing anything about how the host application communicates. The
//! pipeline is single-threaded and fully sequential, so events always arrive
//! in page order from the calling thread; the trait is still `Send + Sync` so
//! the same callback value can be shared freely across an application.

use std::path::Path;
use std::sync::Arc;

/// Called by the extraction pipeline as it processes a document.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait ExtractionProgressCallback: Send + Sync {
    /// Called once after the document is opened, before any page is written.
    ///
    /// # Arguments
    /// * `input`       — path of the source PDF
    /// * `total_pages` — number of pages that will be extracted
    fn on_extract_start(&self, input: &Path, total_pages: usize) {
        let _ = (input, total_pages);
    }

    /// Called when a page file has been written.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    /// * `path`        — path of the written JPEG file
    fn on_page_saved(&self, page_num: usize, total_pages: usize, path: &Path) {
        let _ = (page_num, total_pages, path);
    }

    /// Called when the run aborts with an error, after zero or more pages
    /// were written.
    fn on_extract_error(&self, saved_pages: usize, error: String) {
        let _ = (saved_pages, error);
    }

    /// Called once after every page has been written.
    ///
    /// # Arguments
    /// * `total_pages` — pages extracted
    /// * `output_dir`  — directory containing the page files
    fn on_extract_complete(&self, total_pages: usize, output_dir: &Path) {
        let _ = (total_pages, output_dir);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl ExtractionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ExtractionConfig`].
pub type ProgressCallback = Arc<dyn ExtractionProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct TrackingCallback {
        started_total: AtomicUsize,
        saved: Mutex<Vec<usize>>,
        completed_total: AtomicUsize,
        errors: Mutex<Vec<String>>,
    }

    impl ExtractionProgressCallback for TrackingCallback {
        fn on_extract_start(&self, _input: &Path, total_pages: usize) {
            self.started_total.store(total_pages, Ordering::SeqCst);
        }

        fn on_page_saved(&self, page_num: usize, _total_pages: usize, _path: &Path) {
            self.saved.lock().unwrap().push(page_num);
        }

        fn on_extract_error(&self, _saved_pages: usize, error: String) {
            self.errors.lock().unwrap().push(error);
        }

        fn on_extract_complete(&self, total_pages: usize, _output_dir: &Path) {
            self.completed_total.store(total_pages, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_extract_start(Path::new("doc.pdf"), 3);
        cb.on_page_saved(1, 3, Path::new("out/page_1.jpg"));
        cb.on_extract_error(1, "boom".to_string());
        cb.on_extract_complete(3, Path::new("out"));
    }

    #[test]
    fn tracking_callback_sees_pages_in_order() {
        let tracker = TrackingCallback {
            started_total: AtomicUsize::new(0),
            saved: Mutex::new(vec![]),
            completed_total: AtomicUsize::new(0),
            errors: Mutex::new(vec![]),
        };

        let out = PathBuf::from("pdf_images");
        tracker.on_extract_start(Path::new("doc.pdf"), 3);
        for n in 1..=3 {
            tracker.on_page_saved(n, 3, &out.join(format!("page_{n}.jpg")));
        }
        tracker.on_extract_complete(3, &out);

        assert_eq!(tracker.started_total.load(Ordering::SeqCst), 3);
        assert_eq!(*tracker.saved.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(tracker.completed_total.load(Ordering::SeqCst), 3);
        assert!(tracker.errors.lock().unwrap().is_empty());
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn ExtractionProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_extract_start(Path::new("doc.pdf"), 10);
        cb.on_page_saved(1, 10, Path::new("out/page_1.jpg"));
    }
}
