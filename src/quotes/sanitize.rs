//! Post-processing for generated quote text

/// Substitute quote for empty or truncated completions. Small local models
/// occasionally emit nothing useful; callers always get a real quote.
pub const FALLBACK_QUOTE: &str =
    "Believe in yourself and all that you are capable of achieving.";

/// Minimum length a cleaned quote must have before the fallback kicks in.
const MIN_QUOTE_LEN: usize = 10;

/// Collapse whitespace runs (newlines included) to single spaces and trim.
/// Results shorter than the minimum length are replaced with
/// [`FALLBACK_QUOTE`].
pub fn sanitize_quote(raw: &str) -> String {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.len() < MIN_QUOTE_LEN {
        FALLBACK_QUOTE.to_string()
    } else {
        cleaned
    }
}
