/// Collapse every whitespace run (spaces, tabs, newlines) to a single space
/// and trim the ends. Idempotent; casing and punctuation pass through.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
