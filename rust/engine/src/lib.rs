// rust/engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod search;

// Flat re-exports for the CLI and tests:
pub use engine::{
    Alphabet, CandidateLine, CubeError, DEFAULT_SEED, Direction, FACELET_COUNT, Face, Facelet,
    LID_INITIALISATION, LINE_LEN, Language, Letter, LineFamily, MAX_LAYER, Move, N, Shuffle,
    WordCube, extract_lines,
};
pub use search::{
    Lexicon, Placement, RecognitionError, Recognizer, ScoredMatch, Selection, score_word,
    select_best_word,
};
