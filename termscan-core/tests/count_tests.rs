// Tests for term incidence counting

use termscan_core::count::{TermCounter, Vocabulary};

fn counter(terms: &[&str]) -> TermCounter {
    let vocab = Vocabulary::new(terms.iter().map(|t| t.to_string()).collect());
    TermCounter::new(&vocab).unwrap()
}

// ============================================================================
// Case Insensitivity
// ============================================================================

#[test]
fn test_count_is_case_insensitive() {
    let c = counter(&["esg"]);
    assert_eq!(c.count("ESG esg Esg eSg").get("esg"), Some(4));
}

#[test]
fn test_count_invariant_under_text_casing() {
    let c = counter(&["climate", "risk"]);
    let text = "Climate risk is central. Our climate strategy addresses risk.";

    let mixed = c.count(text);
    let lower = c.count(&text.to_lowercase());
    let upper = c.count(&text.to_uppercase());

    assert_eq!(mixed, lower);
    assert_eq!(lower, upper);
}

// ============================================================================
// Word Boundaries
// ============================================================================

#[test]
fn test_whole_word_only() {
    let c = counter(&["esg"]);
    // only the standalone word matches, not sub-strings of larger words
    assert_eq!(c.count("esg esgalpha alphaesg").get("esg"), Some(1));
}

#[test]
fn test_whole_word_precludes_interior_matches() {
    let c = counter(&["aa"]);
    // "aaaa" has no interior word boundary, so the term never matches inside
    assert_eq!(c.count("aaaa").get("aa"), Some(0));
    assert_eq!(c.count("aa aaaa aa").get("aa"), Some(2));
}

#[test]
fn test_matches_adjacent_to_punctuation() {
    let c = counter(&["risk"]);
    assert_eq!(c.count("risk, risk. (risk)").get("risk"), Some(3));
}

// ============================================================================
// Non-Overlapping Scan
// ============================================================================

#[test]
fn test_non_overlapping_scan() {
    let c = counter(&["aa aa"]);
    // the first match consumes its span; the candidate starting at the
    // middle word is never counted
    assert_eq!(c.count("aa aa aa").get("aa aa"), Some(1));
}

// ============================================================================
// Record Shape
// ============================================================================

#[test]
fn test_absent_term_keeps_key_with_zero() {
    let c = counter(&["climate", "biodiversity"]);
    let tally = c.count("climate change");

    assert_eq!(tally.get("climate"), Some(1));
    assert_eq!(tally.get("biodiversity"), Some(0));
    assert_eq!(tally.len(), 2);
}

#[test]
fn test_empty_text_is_all_zeros() {
    let c = counter(&["climate", "risk", "esg"]);
    let tally = c.count("");

    assert_eq!(tally.len(), 3);
    assert!(tally.counts().all(|count| count == 0));
}

#[test]
fn test_entries_follow_vocabulary_order() {
    let c = counter(&["risk", "climate"]);
    let tally = c.count("climate risk");

    let terms: Vec<&str> = tally.entries().iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(terms, vec!["risk", "climate"]);
}

#[test]
fn test_unknown_term_lookup_is_none() {
    let c = counter(&["climate"]);
    assert_eq!(c.count("climate").get("weather"), None);
}

// ============================================================================
// Term Escaping
// ============================================================================

#[test]
fn test_metacharacter_terms_match_literally() {
    let c = counter(&["s&p 500", "a+ rating"]);
    let tally = c.count("The S&P 500 index. An A+ rating was affirmed.");

    assert_eq!(tally.get("s&p 500"), Some(1));
    assert_eq!(tally.get("a+ rating"), Some(1));
}

#[test]
fn test_dot_term_does_not_wildcard() {
    let c = counter(&["b.c"]);
    // an unescaped dot would also match "bxc"
    assert_eq!(c.count("b.c bxc").get("b.c"), Some(1));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_climate_risk_scenario() {
    let c = counter(&["climate", "risk"]);
    let tally = c.count("Climate risk is central. Our climate strategy addresses risk.");

    assert_eq!(tally.get("climate"), Some(2));
    assert_eq!(tally.get("risk"), Some(2));
}

#[test]
fn test_multi_word_terms() {
    let c = counter(&["climate risk", "net zero"]);
    let tally = c.count("Climate risk and net zero targets shape climate risk policy.");

    assert_eq!(tally.get("climate risk"), Some(2));
    assert_eq!(tally.get("net zero"), Some(1));
}
