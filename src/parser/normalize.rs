//! Feed normalization
//!
//! The telemetry feed is a run of JSON objects, one per line, with no enclosing
//! array and no separators. Every line, including the last one, ends in a newline.
//! Rewriting the newlines as commas, dropping the final character (the comma left
//! by the last newline) and wrapping the result in brackets yields a JSON array.
//!
//! This only accommodates that one feed layout. It is not a lenient JSON parser:
//! a feed whose last line lacks the trailing newline loses its closing brace and
//! fails to parse.

use crate::error::{Result, TrackError};

/// Rewrite a newline-delimited feed into a JSON array literal
pub fn normalize_feed(text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(TrackError::malformed("empty telemetry feed", text));
    }

    let mut body = text.replace('\n', ",");
    body.pop();

    Ok(format!("[{body}]"))
}

/// Map a byte offset in the normalized array text back to the feed line it came from
///
/// Returns the 1-based line number and the line itself. Offsets past the end of
/// the feed (the closing bracket) resolve to the last line.
///
/// The offset is where the JSON parser noticed the problem, which can be past the
/// line that caused it: an object missing its closing brace on line 1 is only
/// detected once line 2 starts.
pub(crate) fn feed_line_at(text: &str, normalized_offset: usize) -> (usize, &str) {
    // the normalized text is the feed shifted right by the opening bracket
    let mut offset = normalized_offset.saturating_sub(1).min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    if offset == text.len() && text.ends_with('\n') {
        offset -= 1;
    }

    let start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let end = text[offset..].find('\n').map_or(text.len(), |i| offset + i);
    let line_number = text[..start].matches('\n').count() + 1;

    (line_number, &text[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_two_lines() {
        let feed = "{\"ts\": 1}\n{\"ts\": 2}\n";
        assert_eq!(normalize_feed(feed).unwrap(), "[{\"ts\": 1},{\"ts\": 2}]");
    }

    #[test]
    fn test_normalize_single_line() {
        assert_eq!(normalize_feed("{}\n").unwrap(), "[{}]");
    }

    #[test]
    fn test_normalize_strips_only_one_trailing_character() {
        // a blank line at the end leaves a dangling comma behind
        assert_eq!(normalize_feed("{}\n\n").unwrap(), "[{},]");
    }

    #[test]
    fn test_missing_trailing_newline_eats_the_last_brace() {
        assert_eq!(normalize_feed("{}\n{}").unwrap(), "[{},{]");
    }

    #[test]
    fn test_empty_feed_is_rejected() {
        assert!(normalize_feed("").unwrap_err().is_malformed());
        assert!(normalize_feed(" \n\n").unwrap_err().is_malformed());
    }

    #[test]
    fn test_feed_line_at() {
        let feed = "{\"a\": 1}\n{\"b\": oops}\n{\"c\": 3}\n";
        let normalized = normalize_feed(feed).unwrap();
        let at = normalized.find("oops").unwrap();
        assert_eq!(feed_line_at(feed, at), (2, "{\"b\": oops}"));

        // the closing bracket maps to the last line
        assert_eq!(feed_line_at(feed, normalized.len()), (3, "{\"c\": 3}"));
        assert_eq!(feed_line_at(feed, 0), (1, "{\"a\": 1}"));
    }

    #[test]
    fn test_unclosed_object_is_noticed_on_the_next_line() {
        let feed = "{\"ts\": 1\n{\"ts\": 2}\n";
        let normalized = normalize_feed(feed).unwrap();
        let err = serde_json::from_str::<serde_json::Value>(&normalized).unwrap_err();
        let (line_number, _) = feed_line_at(feed, err.column());
        assert_eq!(line_number, 2);
    }
}
