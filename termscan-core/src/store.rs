// File persistence: tabular CSV files and per-page text files.

use crate::csv::{parse_rows, write_row};
use crate::slug;
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write a table: header row first, then data rows. Parent directories are
/// created as needed. A run with zero rows still writes the header.
pub fn write_table(path: &Path, header: &[String], rows: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let file =
        fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_row(&mut writer, header)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    for row in rows {
        write_row(&mut writer, row)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Read a table back as (header, rows). A header-only file yields zero
/// rows; a missing or empty file is an error.
pub fn read_table(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut rows = parse_rows(&text);
    if rows.is_empty() {
        bail!("{} has no header row", path.display());
    }
    let header = rows.remove(0);

    Ok((header, rows))
}

/// Write one page's text under `dir`, named by the URL's slug with a `.txt`
/// extension. Returns the path written.
pub fn write_page_text(dir: &Path, url: &str, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(format!("{}.txt", slug::from_url(url)));
    fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
