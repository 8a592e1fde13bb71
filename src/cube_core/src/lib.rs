//! State and move engine for the 3x3x3 Rubik's Cube.
//!
//! A [`CubeState`] records which piece sits at each of the eight corner and
//! twelve edge positions, and how each piece is oriented. Moves are applied by
//! composing with precomputed tables, so any state built from face turns stays
//! a legal cube.
//!
//! ```
//! use cube_core::{CubeState, invert_notation};
//!
//! let mut cube = CubeState::identity();
//! cube.apply_notation("R U R' U'").unwrap();
//! assert!(!cube.is_solved());
//! assert_eq!(cube.order(), Ok(6));
//!
//! cube.apply_notation(&invert_notation("R U R' U'").unwrap()).unwrap();
//! assert!(cube.is_solved());
//! ```

pub mod algebra;
pub mod algorithm;
pub mod combinators;
pub mod cube;
pub mod cycles;
pub mod legality;
pub mod moves;
pub mod parser;

pub use algorithm::Algorithm;
pub use combinators::{
    commutator, commutator_notation, conjugate, conjugate_notation, invert, invert_notation,
    power,
};
pub use cube::{CORNER_NAMES, CORNERS, CubeState, EDGE_NAMES, EDGES, Orbit, PartsError, StateSnapshot};
pub use cycles::{Cycle, CycleReport, FixedPoint, NotAPermutation};
pub use legality::{LegalityReport, Parity, Violations};
pub use moves::{ALL_MOVES, Direction, Face, Move};
pub use parser::{ParseError, Token, parse_algorithm, parse_move};
