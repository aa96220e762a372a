// Tabular shapes for the two output files.

use crate::count::{TermTally, Vocabulary};

pub const URL_COLUMN: &str = "Website";
pub const LINKS_COLUMN: &str = "Links";

/// Accumulates one row per successfully processed page, in processing
/// order. Pages that fail to load never reach the table; there is no
/// placeholder row.
pub struct ResultTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Header is fixed up front: URL column, then the vocabulary in order.
    pub fn new(vocab: &Vocabulary) -> Self {
        let mut header = Vec::with_capacity(vocab.len() + 1);
        header.push(URL_COLUMN.to_string());
        header.extend(vocab.terms().iter().cloned());

        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, url: &str, tally: &TermTally) {
        let mut row = Vec::with_capacity(self.header.len());
        row.push(url.to_string());
        row.extend(tally.counts().map(|count| count.to_string()));
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Header of the links table: a single "Links" column.
pub fn links_header() -> Vec<String> {
    vec![LINKS_COLUMN.to_string()]
}

/// One row per collected link, in collection order.
pub fn links_rows(links: &[String]) -> Vec<Vec<String>> {
    links.iter().map(|link| vec![link.clone()]).collect()
}
