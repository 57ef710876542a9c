//! Errors raised by dictionary operations.

/// Errors that can occur while filling a [`WordDict`](crate::dict::WordDict).
///
/// Failing to match a word is not an error; see
/// [`MatchResult`](crate::dict::MatchResult).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictError {
    /// The word contains the reserved end-of-word marker
    #[error("word {word:?} contains the reserved end-of-word marker '{marker}'")]
    ReservedMarker { word: String, marker: char },

    /// Reading a word list failed
    #[error("failed to read word list")]
    Io(#[from] std::io::Error),
}
