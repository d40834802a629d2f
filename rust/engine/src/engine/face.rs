// rust/engine/src/engine/face.rs
#![forbid(unsafe_code)]

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    U,
    L,
    F,
    R,
    B,
    D,
}

impl Face {
    pub fn all() -> &'static [Face] {
        use Face::*;
        &[U, L, F, R, B, D]
    }

    /// Strict 0..=5 index into the cube's face array (`U L F R B D`).
    pub fn idx(self) -> usize {
        use Face::*;
        match self {
            U => 0,
            L => 1,
            F => 2,
            R => 3,
            B => 4,
            D => 5,
        }
    }

    /// Inverse of `idx()`. Returns None for invalid indices.
    pub fn from_idx(idx: usize) -> Option<Self> {
        Self::all().get(idx).copied()
    }

    pub fn glyph(self) -> char {
        use Face::*;
        match self {
            U => 'U',
            L => 'L',
            F => 'F',
            R => 'R',
            B => 'B',
            D => 'D',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        use Face::*;
        match c.to_ascii_uppercase() {
            'U' => Some(U),
            'L' => Some(L),
            'F' => Some(F),
            'R' => Some(R),
            'B' => Some(B),
            'D' => Some(D),
            _ => None,
        }
    }

    /// Geometric opposite. The mirror reduction depends on exactly these pairs.
    pub fn opposite(self) -> Self {
        use Face::*;
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
            F => B,
            B => F,
        }
    }

    /// True for the faces the rotation engine twists directly (U, L, F).
    #[inline]
    pub fn is_native(self) -> bool {
        matches!(self, Face::U | Face::L | Face::F)
    }

    /// Neighbouring faces, clockwise, starting at 12 o'clock when looking at `self`.
    pub fn adjacent(self) -> [Face; 4] {
        use Face::*;
        match self {
            U => [B, R, F, L],
            L => [U, F, D, B],
            F => [U, R, D, L],
            R => [U, B, D, F],
            B => [U, L, D, R],
            D => [F, R, B, L],
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
