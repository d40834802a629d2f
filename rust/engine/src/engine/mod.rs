// rust/engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod alphabet;
mod constants;
mod cube;
mod error;
mod face;
mod grid;
mod letter;
mod lines;
mod twist;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use alphabet::{Alphabet, GraphemeEntry, Language};
pub use constants::{
    FACELET_COUNT, FACELETS_PER_FACE, FACE_COUNT, LID_INITIALISATION, LINE_LEN, MAX_LAYER,
    MAX_WORD_LEN, MIN_WORD_LEN_EXCLUSIVE, N, decode_position, encode_position,
};
pub use cube::{DEFAULT_SEED, Facelet, Shuffle, WordCube};
pub use error::CubeError;
pub use face::Face;
pub use grid::{Axis, FaceGrid};
pub use letter::Letter;
pub use lines::{CandidateLine, LineFamily, extract_lines};
pub use twist::{Direction, Move};
