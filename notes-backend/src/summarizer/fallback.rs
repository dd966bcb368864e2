//! Local summary used when the provider is unavailable.

/// Number of `.`-delimited fragments kept by [`fallback_summary`]
pub const FALLBACK_SENTENCES: usize = 4;

/// Keep the first few `.`-separated fragments and mark the cut with `...`.
///
/// Fragments are rejoined with `.` exactly as split, so a text ending in a
/// period keeps it before the ellipsis.
pub fn fallback_summary(text: &str) -> String {
    let kept: Vec<&str> = text.split('.').take(FALLBACK_SENTENCES).collect();
    format!("{}...", kept.join("."))
}
