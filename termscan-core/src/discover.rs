// Phase 1: visit each seed page and collect its same-site links.

use crate::store;
use crate::table;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use termscan_scanner::{LinkHarvest, PageFetcher, harvest_anchors};
use tracing::{info, warn};

/// Options for configuring a discovery run
pub struct DiscoverOptions {
    pub seeds: Vec<String>,
    pub links_path: PathBuf,
    pub timeout_secs: u64,
    pub settle: Duration,
    pub show_progress: bool,
}

/// What a discovery run did, for the end-of-phase report.
pub struct DiscoverSummary {
    pub harvests: Vec<LinkHarvest>,
    pub seeds_failed: usize,
    pub links_total: usize,
}

/// Visit every seed in order with one long-lived fetcher and write the
/// collected links table.
///
/// A seed that fails to load is logged and skipped; it contributes no
/// links and does not stop the run. Links accumulate in a buffer owned by
/// this function and are handed to the store once, after the last seed.
/// Zero successful seeds still produce a header-only links file.
pub async fn run_discovery(options: DiscoverOptions) -> Result<DiscoverSummary> {
    let DiscoverOptions {
        seeds,
        links_path,
        timeout_secs,
        settle,
        show_progress,
    } = options;

    info!("Starting link discovery over {} seed(s)", seeds.len());

    let fetcher = PageFetcher::with_timeout(timeout_secs).with_settle(settle);
    let progress_bar = spinner(show_progress);

    let mut harvests: Vec<LinkHarvest> = Vec::new();
    let mut seeds_failed = 0;

    for (idx, seed) in seeds.iter().enumerate() {
        if let Some(ref pb) = progress_bar {
            pb.set_message(format!("Seed {}/{}: {}", idx + 1, seeds.len(), seed));
            pb.tick();
        }

        match fetcher.fetch(seed).await {
            Ok(capture) => {
                let mut harvest = LinkHarvest::new(seed.clone());
                harvest.links = harvest_anchors(&capture.body, &capture.url, seed);
                info!(
                    "{}: {} same-site link(s) (status {})",
                    seed,
                    harvest.links.len(),
                    capture.status_code
                );
                harvests.push(harvest);
            }
            Err(e) => {
                warn!("Failed to visit seed {}: {}", seed, e);
                seeds_failed += 1;
            }
        }
    }

    let all_links: Vec<String> = harvests
        .iter()
        .flat_map(|harvest| harvest.links.iter().cloned())
        .collect();
    let links_total = all_links.len();

    store::write_table(&links_path, &table::links_header(), &table::links_rows(&all_links))?;
    info!("Links written to {}", links_path.display());

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!(
            "Discovery complete: {} link(s) from {} seed(s)",
            links_total,
            harvests.len()
        ));
    }

    Ok(DiscoverSummary {
        harvests,
        seeds_failed,
        links_total,
    })
}

pub(crate) fn spinner(show: bool) -> Option<ProgressBar> {
    if !show {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    Some(pb)
}
