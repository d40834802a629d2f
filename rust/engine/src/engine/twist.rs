// rust/engine/src/engine/twist.rs
#![forbid(unsafe_code)]

use crate::engine::constants::MAX_LAYER;
use crate::engine::error::CubeError;
use crate::engine::face::Face;
use crate::engine::grid::Axis;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Cw,
    Ccw,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Ccw => Direction::Cw,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cw" | "" => Some(Direction::Cw),
            "ccw" | "'" => Some(Direction::Ccw),
            _ => None,
        }
    }

    /// Primitive (counter-clockwise) quarter turns for a face turning this way.
    #[inline]
    pub(crate) fn quarter_turns(self) -> usize {
        match self {
            Direction::Cw => 3,
            Direction::Ccw => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Cw => "cw",
            Direction::Ccw => "ccw",
        }
    }
}

/// One twist: `layer` 0 is the outer slice on `face`, `MAX_LAYER` touches the opposite face.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub face: Face,
    pub layer: usize,
    pub direction: Direction,
}

impl Move {
    pub fn new(face: Face, layer: usize, direction: Direction) -> Result<Self, CubeError> {
        if layer > MAX_LAYER {
            return Err(CubeError::invalid_move(format!(
                "layer {layer} out of range 0..={MAX_LAYER}"
            )));
        }
        Ok(Self {
            face,
            layer,
            direction,
        })
    }

    /// The same physical twist expressed from the opposite face.
    pub fn mirrored(self) -> Self {
        Self {
            face: self.face.opposite(),
            layer: MAX_LAYER - self.layer,
            direction: self.direction.flipped(),
        }
    }

    /// Undoes `self`.
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.flipped(),
            ..self
        }
    }

    /// Parse `<face><layer><direction>`, e.g. `F0cw`, `r2ccw`, `U3`, `B1'`.
    /// Layer defaults to 0 and direction to cw when omitted.
    pub fn parse(token: &str) -> Result<Self, CubeError> {
        let token = token.trim();
        let mut chars = token.chars();
        let face_c = chars
            .next()
            .ok_or_else(|| CubeError::invalid_move("empty move"))?;
        let face = Face::from_glyph(face_c)
            .ok_or_else(|| CubeError::invalid_move(format!("unknown face {face_c:?} in {token:?}")))?;

        let rest = chars.as_str();
        let digits_end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (layer_s, dir_s) = rest.split_at(digits_end);

        let layer = if layer_s.is_empty() {
            0
        } else {
            layer_s
                .parse::<usize>()
                .map_err(|_| CubeError::invalid_move(format!("bad layer in {token:?}")))?
        };
        let direction = Direction::parse(dir_s).ok_or_else(|| {
            CubeError::invalid_move(format!("unknown direction {dir_s:?} in {token:?}"))
        })?;

        Self::new(face, layer, direction)
    }

    /// Parse a whitespace and/or comma separated move script.
    pub fn parse_sequence(script: &str) -> Result<Vec<Self>, CubeError> {
        script
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(Self::parse)
            .collect()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.face, self.layer, self.direction.as_str())
    }
}

/// Which strip index a neighbour exposes at a given twist depth.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Depth {
    /// index == layer
    Same,
    /// index == MAX_LAYER - layer
    Mirrored,
}

impl Depth {
    #[inline]
    pub(crate) fn index(self, layer: usize) -> usize {
        match self {
            Depth::Same => layer,
            Depth::Mirrored => MAX_LAYER - layer,
        }
    }
}

/// One neighbour's boundary strip in a twist cycle.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StripSpec {
    pub face: Face,
    pub axis: Axis,
    pub depth: Depth,
    /// Stored against the cycle's travel direction. A transfer between two strips
    /// reverses the cells iff exactly one of them is flagged.
    pub reversed: bool,
}

const fn strip(face: Face, axis: Axis, depth: Depth, reversed: bool) -> StripSpec {
    StripSpec {
        face,
        axis,
        depth,
        reversed,
    }
}

/// Neighbour strips of each native face, in `Face::adjacent()` order.
/// A clockwise twist moves strip `i` into strip `i + 1`.
///
/// The reversal flags are fixed cube geometry; the inverse, 4-cycle and mirror tests
/// pin them down.
const TWIST_U: [StripSpec; 4] = [
    strip(Face::B, Axis::Row, Depth::Same, false),
    strip(Face::R, Axis::Row, Depth::Same, false),
    strip(Face::F, Axis::Row, Depth::Same, false),
    strip(Face::L, Axis::Row, Depth::Same, false),
];

const TWIST_L: [StripSpec; 4] = [
    strip(Face::U, Axis::Col, Depth::Same, false),
    strip(Face::F, Axis::Col, Depth::Same, false),
    strip(Face::D, Axis::Col, Depth::Same, false),
    strip(Face::B, Axis::Col, Depth::Mirrored, true),
];

const TWIST_F: [StripSpec; 4] = [
    strip(Face::U, Axis::Row, Depth::Mirrored, false),
    strip(Face::R, Axis::Col, Depth::Same, false),
    strip(Face::D, Axis::Row, Depth::Same, true),
    strip(Face::L, Axis::Col, Depth::Mirrored, true),
];

/// Twist table row for a native face; None for R, B, D (handled by mirroring).
pub(crate) fn twist_strips(face: Face) -> Option<&'static [StripSpec; 4]> {
    match face {
        Face::U => Some(&TWIST_U),
        Face::L => Some(&TWIST_L),
        Face::F => Some(&TWIST_F),
        Face::R | Face::B | Face::D => None,
    }
}
