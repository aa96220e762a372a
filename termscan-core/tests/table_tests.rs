// Tests for result aggregation and table shapes

use termscan_core::count::{TermCounter, Vocabulary};
use termscan_core::table::{self, ResultTable};

fn vocab(terms: &[&str]) -> Vocabulary {
    Vocabulary::new(terms.iter().map(|t| t.to_string()).collect())
}

// ============================================================================
// Results Table
// ============================================================================

#[test]
fn test_header_is_url_column_then_vocabulary() {
    let table = ResultTable::new(&vocab(&["climate", "risk"]));

    assert_eq!(
        table.header(),
        &[
            "Website".to_string(),
            "climate".to_string(),
            "risk".to_string()
        ]
    );
    assert!(table.is_empty());
}

#[test]
fn test_rows_follow_arrival_order() {
    let v = vocab(&["climate"]);
    let counter = TermCounter::new(&v).unwrap();
    let mut table = ResultTable::new(&v);

    table.push("https://bank.com/b", &counter.count("climate"));
    table.push("https://bank.com/a", &counter.count(""));

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0][0], "https://bank.com/b");
    assert_eq!(table.rows()[1][0], "https://bank.com/a");
}

#[test]
fn test_row_cells_are_counts_in_vocabulary_order() {
    let v = vocab(&["climate", "risk"]);
    let counter = TermCounter::new(&v).unwrap();
    let mut table = ResultTable::new(&v);

    table.push(
        "https://bank.com/esg",
        &counter.count("climate climate risk"),
    );

    assert_eq!(
        table.rows()[0],
        vec![
            "https://bank.com/esg".to_string(),
            "2".to_string(),
            "1".to_string()
        ]
    );
}

#[test]
fn test_zero_counts_render_as_zero_cells() {
    let v = vocab(&["climate", "risk"]);
    let counter = TermCounter::new(&v).unwrap();
    let mut table = ResultTable::new(&v);

    table.push("https://bank.com/", &counter.count("nothing relevant"));

    assert_eq!(
        table.rows()[0],
        vec![
            "https://bank.com/".to_string(),
            "0".to_string(),
            "0".to_string()
        ]
    );
}

// ============================================================================
// Links Table
// ============================================================================

#[test]
fn test_links_table_shape() {
    assert_eq!(table::links_header(), vec!["Links".to_string()]);

    let rows = table::links_rows(&[
        "https://bank.com/about".to_string(),
        "https://bank.com/esg".to_string(),
    ]);

    assert_eq!(
        rows,
        vec![
            vec!["https://bank.com/about".to_string()],
            vec!["https://bank.com/esg".to_string()],
        ]
    );
}

#[test]
fn test_links_rows_keep_duplicates() {
    let link = "https://bank.com/esg".to_string();
    let rows = table::links_rows(&[link.clone(), link.clone()]);
    assert_eq!(rows.len(), 2);
}
