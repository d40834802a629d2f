// rust/engine/src/engine/error.rs
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::search::RecognitionError;

#[derive(Debug, Error)]
pub enum CubeError {
    /// Rejected before any mutation; the cube is unchanged.
    #[error("invalid move: {reason}")]
    InvalidMove { reason: String },

    #[error("no placement found for {word:?} in line {line_index}")]
    NoPlacementFound { word: String, line_index: usize },

    #[error("recognizer failed on line {line_index}")]
    RecognitionFailure {
        line_index: usize,
        #[source]
        source: RecognitionError,
    },

    #[error("invalid layout: expected {expected} letters, got {got}")]
    InvalidLayout { expected: usize, got: usize },

    #[error("invalid layout: letter {index} has an empty grapheme")]
    EmptyGrapheme { index: usize },

    #[error("no built-in alphabet for language {0:?}")]
    UnsupportedLanguage(String),

    #[error("no grapheme covers {word:?} at character {at}")]
    UnknownGrapheme { word: String, at: usize },
}

impl CubeError {
    pub(crate) fn invalid_move(reason: impl Into<String>) -> Self {
        CubeError::InvalidMove {
            reason: reason.into(),
        }
    }
}
