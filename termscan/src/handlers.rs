use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use termscan_core::config;
use termscan_core::discover::{DiscoverOptions, DiscoverSummary, run_discovery};
use termscan_core::extract::{ExtractOptions, ExtractSummary, run_extraction};

/// Expand `~` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

fn timing_args(args: &ArgMatches) -> (u64, Duration) {
    let timeout_secs = *args.get_one::<u64>("timeout").unwrap();
    let settle = Duration::from_millis(*args.get_one::<u64>("settle").unwrap());
    (timeout_secs, settle)
}

pub async fn handle_discover(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    if let Err(e) = discover(sub_matches).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

pub async fn handle_extract(sub_matches: &ArgMatches) {
    tracing_subscriber::fmt::init();

    if let Err(e) = extract(sub_matches).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

pub async fn handle_run(sub_matches: &ArgMatches) {
    tracing_subscriber::fmt::init();

    println!("{}", "Phase 1: link discovery".bright_white().bold());
    if let Err(e) = discover(sub_matches).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }

    println!("\n{}", "Phase 2: term extraction".bright_white().bold());
    if let Err(e) = extract(sub_matches).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

async fn discover(args: &ArgMatches) -> Result<()> {
    let seeds_path = expand_path(args.get_one::<String>("seeds-file").unwrap());
    let links_path = expand_path(args.get_one::<String>("links-file").unwrap());
    let (timeout_secs, settle) = timing_args(args);

    let seeds = config::load_seeds(&seeds_path)?;

    println!("\n🕷  Visiting {} seed page(s)", seeds.len());
    println!("Timeout: {}s", timeout_secs);
    println!("Settle: {}ms\n", settle.as_millis());

    let summary = run_discovery(DiscoverOptions {
        seeds,
        links_path: links_path.clone(),
        timeout_secs,
        settle,
        show_progress: true,
    })
    .await?;

    println!("\n{} Discovery complete!\n", "✓".green().bold());
    print!("{}", format_discover_summary(&summary, &links_path));

    Ok(())
}

async fn extract(args: &ArgMatches) -> Result<()> {
    let terms_path = expand_path(args.get_one::<String>("terms-file").unwrap());
    let links_path = expand_path(args.get_one::<String>("links-file").unwrap());
    let results_path = expand_path(args.get_one::<String>("results-file").unwrap());
    let pages_dir = expand_path(args.get_one::<String>("pages-dir").unwrap());
    let (timeout_secs, settle) = timing_args(args);

    let vocab = config::load_vocabulary(&terms_path)?;

    println!("\n🔍 Counting {} term(s) across collected pages", vocab.len());
    println!("Timeout: {}s", timeout_secs);
    println!("Settle: {}ms\n", settle.as_millis());

    let summary = run_extraction(
        ExtractOptions {
            links_path,
            results_path: results_path.clone(),
            pages_dir,
            timeout_secs,
            settle,
            show_progress: true,
        },
        &vocab,
    )
    .await?;

    println!("\n{} Extraction complete!\n", "✓".green().bold());
    print!("{}", format_extract_summary(&summary, &results_path));

    Ok(())
}

pub fn format_discover_summary(summary: &DiscoverSummary, links_path: &Path) -> String {
    let mut report = String::new();
    report.push_str(&format!("  Seeds visited:  {}\n", summary.harvests.len()));
    report.push_str(&format!("  Seeds failed:   {}\n", summary.seeds_failed));
    report.push_str(&format!("  Links written:  {}\n", summary.links_total));
    report.push('\n');

    for harvest in &summary.harvests {
        report.push_str(&format!(
            "  {} {} ({} links)\n",
            "→".blue(),
            harvest.seed,
            harvest.links.len()
        ));
    }
    report.push('\n');

    report.push_str(&format!("  Links table: {}\n", links_path.display()));
    report.push_str(&format!(
        "  Finished:    {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    report
}

pub fn format_extract_summary(summary: &ExtractSummary, results_path: &Path) -> String {
    let mut report = String::new();
    report.push_str(&format!("  Links loaded:   {}\n", summary.links_loaded));
    report.push_str(&format!("  Pages failed:   {}\n", summary.pages_failed));
    report.push_str(&format!("  Rows written:   {}\n", summary.rows_written));
    report.push('\n');

    report.push_str(&format!("  Results table: {}\n", results_path.display()));
    report.push_str(&format!(
        "  Finished:      {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    report
}
