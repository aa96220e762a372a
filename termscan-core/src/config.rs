// Startup configuration: seed URLs and the term vocabulary.
//
// Both files accept either a JSON string array (`.json` extension) or plain
// newline-delimited text. Loaded once, never mutated afterwards.

use crate::count::Vocabulary;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::warn;
use url::Url;

/// Load the seed URL list, preserving file order.
pub fn load_seeds(path: &Path) -> Result<Vec<String>> {
    let entries = load_string_list(path)?;
    let seeds: Vec<String> = entries
        .iter()
        .filter_map(|line| validate_seed(line))
        .collect();

    if seeds.is_empty() {
        bail!("No valid seed URLs found in {}", path.display());
    }

    Ok(seeds)
}

/// Keep a seed only if it parses as an absolute URL.
///
/// The string is kept verbatim, no scheme guessing or normalization: the
/// same-site filter compares collected links against it character for
/// character.
pub fn validate_seed(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if Url::parse(line).is_ok() {
        return Some(line.to_string());
    }
    warn!("Skipping invalid seed URL '{}'", line);
    None
}

/// Load the term vocabulary, preserving file order.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let entries = load_string_list(path)?;
    let terms: Vec<String> = entries
        .iter()
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
        .collect();

    if terms.is_empty() {
        bail!("No terms found in {}", path.display());
    }

    Ok(Vocabulary::new(terms))
}

fn load_string_list(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
        serde_json::from_str(&content)
            .with_context(|| format!("{} is not a JSON array of strings", path.display()))
    } else {
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect())
    }
}
