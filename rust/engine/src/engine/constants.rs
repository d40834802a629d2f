// src/engine/constants.rs
#![forbid(unsafe_code)]

/// Edge length of every face grid.
pub const N: usize = 4;

pub const FACE_COUNT: usize = 6;
pub const FACELETS_PER_FACE: usize = N * N;
pub const FACELET_COUNT: usize = FACE_COUNT * FACELETS_PER_FACE;

/// Deepest layer index; layer `MAX_LAYER` touches the opposite face.
pub const MAX_LAYER: usize = N - 1;

/// Letters in one wrap-around candidate line (four faces).
pub const LINE_LEN: usize = 4 * N;

/// A selected word must be strictly longer than this (in characters).
pub const MIN_WORD_LEN_EXCLUSIVE: usize = 4;
/// ...and at most this long, so it fits on one great circle.
pub const MAX_WORD_LEN: usize = LINE_LEN;

/**
 * Logical id assigned to each flat construction index.
 *
 * Construction order is `face, row, col` with faces in `U L F R B D` order; entry `i`
 * is the logical id of the letter placed at flat position `i`. This is sticker
 * geometry data: display layers correlate logical ids with physical stickers through
 * it, so it must stay bit-exact.
 */
pub const LID_INITIALISATION: [u8; FACELET_COUNT] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    35, 39, 43, 47, 34, 38, 42, 46, 33, 37, 41, 45, 32, 36, 40, 44, //
    95, 91, 87, 83, 94, 90, 86, 82, 93, 89, 85, 81, 92, 88, 84, 80, //
    63, 59, 55, 51, 62, 58, 54, 50, 61, 57, 53, 49, 60, 56, 52, 48, //
    75, 74, 73, 79, 72, 71, 70, 78, 69, 68, 67, 77, 66, 65, 64, 76, //
    28, 29, 30, 31, 24, 25, 26, 27, 20, 21, 22, 23, 16, 17, 18, 19, //
];

#[inline]
pub fn encode_position(face: usize, row: usize, col: usize) -> usize {
    debug_assert!(face < FACE_COUNT);
    debug_assert!(row < N);
    debug_assert!(col < N);
    face * FACELETS_PER_FACE + row * N + col
}

#[inline]
pub fn decode_position(pos: usize) -> (usize, usize, usize) {
    (
        pos / FACELETS_PER_FACE,
        (pos % FACELETS_PER_FACE) / N,
        pos % N,
    )
}
