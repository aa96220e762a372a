/// Filesystem-safe name for a URL.
///
/// `:` becomes `-` and `/` becomes `_`; anything else outside
/// `[A-Za-z0-9._~-]` becomes `-`. Pure and total. Distinct URLs can
/// collide (e.g. after stripping query punctuation); collisions are not
/// deduplicated and the last write wins, matching the link list's
/// no-dedup policy.
pub fn from_url(url: &str) -> String {
    url.chars()
        .map(|c| match c {
            ':' => '-',
            '/' => '_',
            c if c.is_ascii_alphanumeric() => c,
            '.' | '_' | '~' | '-' => c,
            _ => '-',
        })
        .collect()
}
