// Term incidence counting over normalized page text.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Ordered term list, fixed at startup and shared read-only by every
/// counting operation. Order defines the results table's column order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Whole-word, case-insensitive occurrence counter for a fixed vocabulary.
///
/// One pattern per term, compiled once at construction. Terms are escaped
/// before being wrapped in word boundaries, so a term like `c++` matches
/// literally instead of misfiring as a pattern.
pub struct TermCounter {
    terms: Vec<String>,
    patterns: Vec<Regex>,
}

impl TermCounter {
    pub fn new(vocab: &Vocabulary) -> Result<Self> {
        let mut patterns = Vec::with_capacity(vocab.len());
        for term in vocab.terms() {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            let regex = Regex::new(&pattern)
                .with_context(|| format!("Failed to compile pattern for term '{}'", term))?;
            patterns.push(regex);
        }

        Ok(Self {
            terms: vocab.terms().to_vec(),
            patterns,
        })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Count occurrences of every vocabulary term in `text`.
    ///
    /// Matches are consumed left to right without overlap. The tally always
    /// carries exactly one entry per term, in vocabulary order, with 0 for
    /// terms that never occur. Empty text tallies all zeros.
    pub fn count(&self, text: &str) -> TermTally {
        let entries = self
            .terms
            .iter()
            .zip(&self.patterns)
            .map(|(term, pattern)| (term.clone(), pattern.find_iter(text).count()))
            .collect();

        TermTally { entries }
    }
}

/// One page's term-incidence record: term -> occurrence count, in
/// vocabulary order, never missing a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermTally {
    entries: Vec<(String, usize)>,
}

impl TermTally {
    pub fn get(&self, term: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, count)| *count)
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
