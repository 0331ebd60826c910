use std::fmt;

/// Longest slice of offending input quoted back in a `MalformedInput` message
const EXCERPT_LIMIT: usize = 80;

/// Errors raised while fetching or interpreting a telemetry feed
#[derive(Debug)]
pub enum TrackError {
    /// The telemetry source could not be retrieved
    Fetch(String),
    /// The feed text does not match the expected record shapes
    MalformedInput(String),
}

impl TrackError {
    /// Build a `MalformedInput` error quoting (a bounded excerpt of) the offending fragment
    pub fn malformed(reason: impl fmt::Display, fragment: &str) -> Self {
        TrackError::MalformedInput(format!("{reason}: `{}`", excerpt(fragment)))
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, TrackError::Fetch(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, TrackError::MalformedInput(_))
    }
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::Fetch(msg) => write!(f, "Failed to get data from the source: {}", msg),
            TrackError::MalformedInput(msg) => write!(f, "Malformed telemetry input: {}", msg),
        }
    }
}

impl std::error::Error for TrackError {}

impl From<reqwest::Error> for TrackError {
    fn from(err: reqwest::Error) -> Self {
        TrackError::Fetch(err.to_string())
    }
}

impl From<std::io::Error> for TrackError {
    fn from(err: std::io::Error) -> Self {
        TrackError::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for TrackError {
    fn from(err: serde_json::Error) -> Self {
        TrackError::MalformedInput(err.to_string())
    }
}

/// Cut `text` down to at most `EXCERPT_LIMIT` chars, marking the cut with an ellipsis
pub(crate) fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, TrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_keeps_short_fragments() {
        assert_eq!(excerpt(r#"{"ts": 1}"#), r#"{"ts": 1}"#);
    }

    #[test]
    fn test_excerpt_truncates_long_fragments() {
        let long = "x".repeat(200);
        let cut = excerpt(&long);
        assert_eq!(cut.len(), EXCERPT_LIMIT + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_malformed_message_quotes_fragment() {
        let err = TrackError::malformed("record 3 has no geo point", r#"{"ts": 7}"#);
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            r#"Malformed telemetry input: record 3 has no geo point: `{"ts": 7}`"#
        );
    }

    #[test]
    fn test_io_errors_are_fetch_errors() {
        let err: TrackError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_fetch());
        assert!(err.to_string().contains("gone"));
    }
}
