// Phase 2: visit each collected link, count vocabulary terms, persist the
// results table and one text file per page.

use crate::count::{TermCounter, Vocabulary};
use crate::discover::spinner;
use crate::store;
use crate::table::ResultTable;
use crate::text::normalize_whitespace;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use termscan_scanner::{PageFetcher, visible_text};
use tracing::{debug, info, warn};

/// Options for configuring an extraction run
pub struct ExtractOptions {
    pub links_path: PathBuf,
    pub results_path: PathBuf,
    pub pages_dir: PathBuf,
    pub timeout_secs: u64,
    pub settle: Duration,
    pub show_progress: bool,
}

/// What an extraction run did, for the end-of-phase report.
pub struct ExtractSummary {
    pub links_loaded: usize,
    pub pages_failed: usize,
    pub rows_written: usize,
}

/// Load the links table written by discovery and process every link in file
/// order with one long-lived fetcher.
///
/// Per-link failures (navigation, extraction, file write) are logged and
/// skipped: no result row, no text file, processing continues. A run with
/// zero successes still writes a header-only results file.
pub async fn run_extraction(options: ExtractOptions, vocab: &Vocabulary) -> Result<ExtractSummary> {
    let ExtractOptions {
        links_path,
        results_path,
        pages_dir,
        timeout_secs,
        settle,
        show_progress,
    } = options;

    let (header, rows) = store::read_table(&links_path).with_context(|| {
        format!(
            "Failed to load the links table {} (run discovery first)",
            links_path.display()
        )
    })?;
    let links: Vec<String> = rows
        .into_iter()
        .filter_map(|row| row.into_iter().next())
        .collect();
    debug!(
        "Loaded {} link(s) from {} (header {:?})",
        links.len(),
        links_path.display(),
        header
    );
    info!("Starting term extraction over {} link(s)", links.len());

    let fetcher = PageFetcher::with_timeout(timeout_secs).with_settle(settle);
    let counter = TermCounter::new(vocab)?;
    let mut results = ResultTable::new(vocab);
    let mut pages_failed = 0;

    let progress_bar = spinner(show_progress);

    for (idx, link) in links.iter().enumerate() {
        if let Some(ref pb) = progress_bar {
            pb.set_message(format!("Page {}/{}: {}", idx + 1, links.len(), link));
            pb.tick();
        }

        match process_page(&fetcher, link, &pages_dir).await {
            Ok(text) => {
                let tally = counter.count(&text);
                results.push(link, &tally);
            }
            Err(e) => {
                warn!("Failed to process {}: {:#}", link, e);
                pages_failed += 1;
            }
        }
    }

    let rows_written = results.len();
    store::write_table(&results_path, results.header(), results.rows())?;
    info!("Results written to {}", results_path.display());

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!(
            "Extraction complete: {} of {} page(s) processed",
            rows_written,
            links.len()
        ));
    }

    Ok(ExtractSummary {
        links_loaded: links.len(),
        pages_failed,
        rows_written,
    })
}

/// One per-link attempt: fetch, extract and normalize the visible text,
/// persist the page's text file. Any failure skips the whole item.
async fn process_page(fetcher: &PageFetcher, url: &str, pages_dir: &Path) -> Result<String> {
    let capture = fetcher.fetch(url).await?;
    let text = normalize_whitespace(&visible_text(&capture.body));
    store::write_page_text(pages_dir, url, &text)?;
    Ok(text)
}
