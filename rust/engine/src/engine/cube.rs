// rust/engine/src/engine/cube.rs
#![forbid(unsafe_code)]

use crate::engine::alphabet::{Alphabet, Language};
use crate::engine::constants::{
    decode_position, encode_position, FACELET_COUNT, FACE_COUNT, LID_INITIALISATION,
    MAX_LAYER, N,
};
use crate::engine::error::CubeError;
use crate::engine::face::Face;
use crate::engine::grid::{read_strip, rotate_quarter_turns, write_strip, FaceGrid};
use crate::engine::letter::Letter;
use crate::engine::lines::{extract_lines, CandidateLine};
use crate::engine::twist::{twist_strips, Direction, Move};

/// Seed used when a cube is generated without an explicit one.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shuffle {
    /// Keep the letter bag in alphabet table order.
    None,
    Seeded(u64),
}

/// The physical facelet a letter currently occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Debug)]
pub struct WordCube {
    /// Letter arena indexed by physical position `[face][row][col]`.
    faces: [FaceGrid<Letter>; FACE_COUNT],

    /// logical id -> flat physical position; rebuilt after every twist.
    positions: [u8; FACELET_COUNT],

    pub twists: u64,
}

impl WordCube {
    /// Default: Spanish alphabet, shuffled with `seed`.
    pub fn new(seed: u64) -> Result<Self, CubeError> {
        Self::for_language(Language::Es, Shuffle::Seeded(seed))
    }

    pub fn for_language(language: Language, shuffle: Shuffle) -> Result<Self, CubeError> {
        let alphabet = Alphabet::for_language(language)?;
        Self::generate(&alphabet, shuffle)
    }

    /// Build the letter bag from the alphabet counts, optionally shuffle it, and lay it out.
    pub fn generate(alphabet: &Alphabet, shuffle: Shuffle) -> Result<Self, CubeError> {
        let bag = match shuffle {
            Shuffle::None => alphabet.letter_bag()?,
            Shuffle::Seeded(seed) => alphabet.shuffled_bag(seed)?,
        };
        Self::from_letters(&bag)
    }

    /// Explicit layout: 96 graphemes in flat `face, row, col` order (faces `U L F R B D`).
    /// Flat index `i` receives logical id `LID_INITIALISATION[i]`. Graphemes must be non-empty.
    pub fn from_letters<S: AsRef<str>>(letters: &[S]) -> Result<Self, CubeError> {
        if letters.len() != FACELET_COUNT {
            return Err(CubeError::InvalidLayout {
                expected: FACELET_COUNT,
                got: letters.len(),
            });
        }
        if let Some(index) = letters.iter().position(|l| l.as_ref().is_empty()) {
            return Err(CubeError::EmptyGrapheme { index });
        }

        let faces: [FaceGrid<Letter>; FACE_COUNT] = core::array::from_fn(|f| {
            core::array::from_fn(|r| {
                core::array::from_fn(|c| {
                    let i = encode_position(f, r, c);
                    Letter::new(letters[i].as_ref(), LID_INITIALISATION[i])
                })
            })
        });

        let mut cube = Self {
            faces,
            positions: [0u8; FACELET_COUNT],
            twists: 0,
        };
        cube.reindex();
        Ok(cube)
    }

    #[inline]
    pub fn face(&self, face: Face) -> &FaceGrid<Letter> {
        &self.faces[face.idx()]
    }

    #[inline]
    pub fn letter_at(&self, face: Face, row: usize, col: usize) -> &Letter {
        &self.faces[face.idx()][row][col]
    }

    /// Logical ids of one face, row-major.
    pub fn face_ids(&self, face: Face) -> [[u8; N]; N] {
        let g = self.face(face);
        core::array::from_fn(|r| core::array::from_fn(|c| g[r][c].id()))
    }

    /// Graphemes of one face, row-major.
    pub fn face_graphemes(&self, face: Face) -> [[String; N]; N] {
        let g = self.face(face);
        core::array::from_fn(|r| core::array::from_fn(|c| g[r][c].grapheme().to_string()))
    }

    /// Logical id at each flat physical position.
    pub fn ids(&self) -> [u8; FACELET_COUNT] {
        core::array::from_fn(|pos| {
            let (f, r, c) = decode_position(pos);
            self.faces[f][r][c].id()
        })
    }

    /// Where the letter with `id` currently sits.
    pub fn position_of(&self, id: u8) -> Option<Facelet> {
        let pos = *self.positions.get(id as usize)? as usize;
        let (f, row, col) = decode_position(pos);
        Face::from_idx(f).map(|face| Facelet { face, row, col })
    }

    pub fn letter_by_id(&self, id: u8) -> Option<&Letter> {
        self.position_of(id)
            .map(|p| self.letter_at(p.face, p.row, p.col))
    }

    fn reindex(&mut self) {
        for (f, grid) in self.faces.iter().enumerate() {
            for (r, row) in grid.iter().enumerate() {
                for (c, letter) in row.iter().enumerate() {
                    self.positions[letter.id() as usize] = encode_position(f, r, c) as u8;
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Twists
    // -------------------------------------------------------------------------

    /// Twist `layer` of `face`. Out-of-range layers fail with `InvalidMove` and leave
    /// the cube untouched.
    pub fn rotate(&mut self, face: Face, layer: usize, direction: Direction) -> Result<(), CubeError> {
        let mv = Move::new(face, layer, direction)?;
        self.rotate_move(mv)
    }

    pub fn rotate_move(&mut self, mv: Move) -> Result<(), CubeError> {
        if mv.layer > MAX_LAYER {
            return Err(CubeError::invalid_move(format!(
                "layer {} out of range 0..={MAX_LAYER}",
                mv.layer
            )));
        }

        // R, B, D twists are the same physical move seen from the opposite face.
        let native = if mv.face.is_native() { mv } else { mv.mirrored() };
        self.twist_native(native)?;

        self.reindex();
        self.twists += 1;
        tracing::debug!(%mv, %native, "twist");
        Ok(())
    }

    /// Validates the whole sequence first; on error nothing is applied.
    pub fn apply_moves(&mut self, moves: &[Move]) -> Result<(), CubeError> {
        if let Some(bad) = moves.iter().find(|m| m.layer > MAX_LAYER) {
            return Err(CubeError::invalid_move(format!(
                "layer {} out of range 0..={MAX_LAYER} in {bad:?}",
                bad.layer
            )));
        }
        for &mv in moves {
            self.rotate_move(mv)?;
        }
        Ok(())
    }

    fn twist_native(&mut self, mv: Move) -> Result<(), CubeError> {
        let Some(strips) = twist_strips(mv.face) else {
            return Err(CubeError::invalid_move(format!(
                "{} is not a natively twisted face",
                mv.face
            )));
        };

        if mv.layer == 0 {
            rotate_quarter_turns(&mut self.faces[mv.face.idx()], mv.direction.quarter_turns());
        }
        if mv.layer == MAX_LAYER {
            // The far slice co-rotates with the opposite face, which sees it turning backwards.
            let back = mv.face.opposite().idx();
            rotate_quarter_turns(&mut self.faces[back], mv.direction.flipped().quarter_turns());
        }

        let cells: [[Letter; N]; 4] = core::array::from_fn(|i| {
            let s = &strips[i];
            read_strip(&self.faces[s.face.idx()], s.axis, s.depth.index(mv.layer))
        });

        for (i, dst) in strips.iter().enumerate() {
            let src_i = match mv.direction {
                Direction::Cw => (i + 3) % 4,
                Direction::Ccw => (i + 1) % 4,
            };
            let src = &strips[src_i];
            write_strip(
                &mut self.faces[dst.face.idx()],
                dst.axis,
                dst.depth.index(mv.layer),
                &cells[src_i],
                src.reversed != dst.reversed,
            );
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn lines(&self, axis: Face) -> Vec<CandidateLine> {
        extract_lines(self, axis)
    }

    /// Net layout: U on top, then L F R B side by side, then D.
    pub fn render_ascii(&self) -> String {
        let width = self
            .faces
            .iter()
            .flatten()
            .flatten()
            .map(Letter::char_len)
            .max()
            .unwrap_or(1);
        let face_w = N * (width + 1) + 1;
        let indent = " ".repeat(face_w + 1);

        let row_str = |face: Face, r: usize| -> String {
            let mut s = String::new();
            for letter in &self.faces[face.idx()][r] {
                s.push_str(&format!("|{:<width$}", letter.grapheme()));
            }
            s.push('|');
            s
        };

        let mut s = String::new();
        for r in 0..N {
            s.push_str(&indent);
            s.push_str(&row_str(Face::U, r));
            s.push('\n');
        }
        s.push('\n');
        for r in 0..N {
            let row: Vec<String> = [Face::L, Face::F, Face::R, Face::B]
                .iter()
                .map(|&f| row_str(f, r))
                .collect();
            s.push_str(&row.join(" "));
            s.push('\n');
        }
        s.push('\n');
        for r in 0..N {
            s.push_str(&indent);
            s.push_str(&row_str(Face::D, r));
            s.push('\n');
        }
        s.push_str(&format!("twists={}\n", self.twists));
        s
    }
}
