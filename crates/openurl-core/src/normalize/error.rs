//! Error type for rejected address input.

use thiserror::Error;

/// Raised when user text cannot be turned into an absolute http(s) URL.
///
/// This is the only domain error: callers show a notice and keep the user
/// on the entry screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid URL {input:?}: {kind}")]
pub struct InvalidUrl {
    /// The raw text as submitted (untrimmed).
    pub input: String,
    pub kind: InvalidUrlKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidUrlKind {
    /// Absent, empty or whitespace-only input.
    #[error("empty input")]
    Empty,
    /// The scheme-prefixed text failed absolute-URL parsing.
    #[error("{0}")]
    Parse(url::ParseError),
}

impl InvalidUrl {
    pub(super) fn empty(input: &str) -> Self {
        Self {
            input: input.to_string(),
            kind: InvalidUrlKind::Empty,
        }
    }

    pub(super) fn parse(input: &str, err: url::ParseError) -> Self {
        Self {
            input: input.to_string(),
            kind: InvalidUrlKind::Parse(err),
        }
    }
}
