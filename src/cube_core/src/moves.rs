//! The closed set of eighteen face turns.
//!
//! A [`Move`] is a [`Face`] paired with a [`Direction`]. Moves carry no state;
//! what a move *does* to a cube lives in [`crate::algebra`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// An enum for the faces of the Rubik's Cube.
///
/// - U: top face
/// - D: bottom face
/// - L: left face
/// - R: right face
/// - F: front face
/// - B: back face
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl Face {
    /// Every face, in table order.
    pub const ALL: [Self; 6] = {
        use Face::{B, D, F, L, R, U};
        let v = [U, D, L, R, F, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// Parse a single face letter.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'U' => Face::U,
            'D' => Face::D,
            'L' => Face::L,
            'R' => Face::R,
            'F' => Face::F,
            'B' => Face::B,
            _ => return None,
        })
    }
}

/// Represents the direction which to turn a face. `Prime` represents
/// a counter-clockwise rotation of a face, and `Double` represents
/// a 180 degree rotation of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Direction {
    Normal,
    Prime,
    Double,
}

impl Direction {
    /// How many clockwise quarter turns this direction amounts to.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Direction::Normal => 1,
            Direction::Double => 2,
            Direction::Prime => 3,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Normal => Direction::Prime,
            Direction::Prime => Direction::Normal,
            Direction::Double => Direction::Double,
        }
    }

    /// The notation suffix. `'` is the only prime marker ever emitted.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Direction::Normal => "",
            Direction::Prime => "'",
            Direction::Double => "2",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A face equipped with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub dir: Direction,
}

/// A shorthand macro that can be used to construct moves.
///
/// ```
/// use cube_core::cube_move;
/// use cube_core::moves::{Direction, Face, Move};
///
/// let r_prime: Move = cube_move!(R, Prime);
/// let u2: Move = cube_move!(U, Double);
/// assert_eq!(r_prime.to_string(), "R'");
/// assert_eq!(u2.to_string(), "U2");
/// ```
#[macro_export]
macro_rules! cube_move {
    ($face:ident, $dir:ident) => {{
        $crate::moves::Move {
            face: $crate::moves::Face::$face,
            dir: $crate::moves::Direction::$dir,
        }
    }};
}

impl Move {
    #[must_use]
    pub const fn new(face: Face, dir: Direction) -> Self {
        Self { face, dir }
    }

    /// The move that undoes this one. Half turns are their own inverse.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            dir: self.dir.inverse(),
        }
    }

    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self.dir.quarter_turns()
    }

    /// Index of this move in [`ALL_MOVES`] and in the precomputed move tables.
    #[must_use]
    pub const fn index(self) -> usize {
        let dir = match self.dir {
            Direction::Normal => 0,
            Direction::Prime => 1,
            Direction::Double => 2,
        };
        self.face as usize * 3 + dir
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.dir)
    }
}

/// All eighteen moves, ordered so that `ALL_MOVES[m.index()] == m`.
pub const ALL_MOVES: [Move; 18] = [
    cube_move!(U, Normal),
    cube_move!(U, Prime),
    cube_move!(U, Double),
    cube_move!(D, Normal),
    cube_move!(D, Prime),
    cube_move!(D, Double),
    cube_move!(L, Normal),
    cube_move!(L, Prime),
    cube_move!(L, Double),
    cube_move!(R, Normal),
    cube_move!(R, Prime),
    cube_move!(R, Double),
    cube_move!(F, Normal),
    cube_move!(F, Prime),
    cube_move!(F, Double),
    cube_move!(B, Normal),
    cube_move!(B, Prime),
    cube_move!(B, Double),
];
