// rust/engine/src/engine/lines.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{LINE_LEN, MAX_LAYER, N};
use crate::engine::cube::WordCube;
use crate::engine::face::Face;
use crate::engine::letter::Letter;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineFamily {
    /// Columns through U, F, D and (mirrored) B.
    Vertical,
    /// Rows through L, F, R, B.
    Horizontal,
}

/// A 16-letter great circle read off the cube, with the logical ids index-aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateLine {
    pub family: LineFamily,
    pub letters: Vec<Letter>,
    pub ids: Vec<u8>,
}

impl CandidateLine {
    pub fn new(family: LineFamily, letters: Vec<Letter>) -> Self {
        let ids = letters.iter().map(Letter::id).collect();
        Self {
            family,
            letters,
            ids,
        }
    }

    fn reversed(mut self) -> Self {
        self.letters.reverse();
        self.ids.reverse();
        self
    }

    /// Graphemes concatenated in reading order.
    pub fn text(&self) -> String {
        self.letters.iter().map(Letter::grapheme).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/**
 * All candidate lines through `axis`.
 *
 * - Vertical family (axis U, F, D, B): column `i` of U, F, D top to bottom, then
 *   column `3 - i` of B bottom to top. Seen from B the family is reversed, both in
 *   line order and within each line.
 * - Horizontal family (axis L, F, R, B): row `i` of L, F, R, B.
 *
 * Vertical lines come first. Pure: the cube is only read.
 */
pub fn extract_lines(cube: &WordCube, axis: Face) -> Vec<CandidateLine> {
    let mut out = Vec::with_capacity(2 * N);

    if matches!(axis, Face::U | Face::F | Face::D | Face::B) {
        let mut vertical: Vec<CandidateLine> = (0..N).map(|i| vertical_line(cube, i)).collect();
        if axis == Face::B {
            vertical = vertical.into_iter().rev().map(CandidateLine::reversed).collect();
        }
        out.extend(vertical);
    }

    if matches!(axis, Face::L | Face::F | Face::R | Face::B) {
        out.extend((0..N).map(|i| horizontal_line(cube, i)));
    }

    out
}

fn vertical_line(cube: &WordCube, col: usize) -> CandidateLine {
    let mut letters = Vec::with_capacity(LINE_LEN);
    for face in [Face::U, Face::F, Face::D] {
        let g = cube.face(face);
        letters.extend((0..N).map(|r| g[r][col].clone()));
    }
    let back = cube.face(Face::B);
    letters.extend((0..N).rev().map(|r| back[r][MAX_LAYER - col].clone()));
    debug_assert_eq!(letters.len(), LINE_LEN);
    CandidateLine::new(LineFamily::Vertical, letters)
}

fn horizontal_line(cube: &WordCube, row: usize) -> CandidateLine {
    let mut letters = Vec::with_capacity(LINE_LEN);
    for face in [Face::L, Face::F, Face::R, Face::B] {
        letters.extend(cube.face(face)[row].iter().cloned());
    }
    debug_assert_eq!(letters.len(), LINE_LEN);
    CandidateLine::new(LineFamily::Horizontal, letters)
}
