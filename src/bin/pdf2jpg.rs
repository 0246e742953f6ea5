//! CLI binary for pdf2jpg.
//!
//! A thin shim over the library crate. There is no argument parsing: the
//! input file and output directory are fixed, matching the tool's single
//! purpose. Logging verbosity is still controllable via `RUST_LOG`.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use pdf2jpg::{extract, ExtractionConfig, ExtractionProgressCallback, ProgressCallback};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Path to the PDF file.
const PDF_PATH: &str = "THE-CAT-IN-THE-HAT.pdf";

/// Directory the page images are written into.
const OUTPUT_DIR: &str = "pdf_images";

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar plus one log line
/// per saved page. The bar length is set by `on_extract_start` once the page
/// count is known.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_extract_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Rendering");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }
}

impl ExtractionProgressCallback for CliProgressCallback {
    fn on_extract_start(&self, _input: &Path, total_pages: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} pages  ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total_pages as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Saving");
    }

    fn on_page_saved(&self, page_num: usize, total: usize, path: &Path) {
        self.bar.println(format!(
            "  {} Saved {}  {}",
            green("✓"),
            path.display(),
            dim(&format!("page {page_num}/{total}")),
        ));
        self.bar.inc(1);
    }

    fn on_extract_error(&self, saved_pages: usize, error: String) {
        self.bar.finish_and_clear();
        eprintln!(
            "{} extraction aborted after {} pages: {}",
            red("✘"),
            saved_pages,
            red(&error)
        );
    }

    fn on_extract_complete(&self, total_pages: usize, output_dir: &Path) {
        self.bar.finish_and_clear();
        eprintln!(
            "{} {} pages extracted to {}",
            green("✔"),
            bold(&total_pages.to_string()),
            bold(&output_dir.display().to_string()),
        );
    }
}

fn main() -> Result<()> {
    // ── Logging setup ────────────────────────────────────────────────────
    // Default to errors only; the progress bar and summary lines provide
    // all the feedback that matters. RUST_LOG overrides as usual.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Converting {PDF_PATH} to images...");

    let progress: ProgressCallback = CliProgressCallback::new_dynamic();
    let config = ExtractionConfig::builder()
        .progress_callback(progress)
        .build()
        .context("Invalid configuration")?;

    let output = extract(PDF_PATH, OUTPUT_DIR, &config).context("Conversion failed")?;

    println!(
        "Conversion complete! {} pages extracted to {}/ directory.",
        output.stats.saved_pages, OUTPUT_DIR
    );

    Ok(())
}
