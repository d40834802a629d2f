// rust/engine/src/search/mod.rs
#![forbid(unsafe_code)]

mod recognizer;
mod score;
mod selector;

/**
 * Curated search public API.
 *
 * Recognition, scoring and best-word placement; the cube itself lives in `engine`.
 */
pub use recognizer::{Lexicon, RecognitionError, Recognizer};
pub use score::{score_matches, score_word, tokenize, ScoredMatch};
pub use selector::{extended_query, locate, score_line, select_best_word, Placement, Selection};
