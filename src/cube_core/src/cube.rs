//! A module providing functions to interact with the
//! structure and state of the Rubik's Cube.
//!
//! The state of the Rubik's Cube is internally represented
//! by four properties of the cube: corner permutation, corner
//! orientation, edge permutation, and edge orientation. A tuple
//! of these four properties (with correct parity relations)
//! uniquely determines the state of the cube.

use crate::{
    algebra,
    algorithm::Algorithm,
    cycles::{self, CycleReport, NotAPermutation},
    legality::LegalityReport,
    moves::Move,
    parser::{self, ParseError},
};
use log::trace;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

pub const CORNERS: usize = 8;
pub const EDGES: usize = 12;

/// Corner position names, indexed by position.
pub const CORNER_NAMES: [&str; CORNERS] = ["URF", "UFL", "ULB", "UBR", "DFR", "DLF", "DBL", "DRB"];

/// Edge position names, indexed by position.
pub const EDGE_NAMES: [&str; EDGES] = [
    "UR", "UF", "UL", "UB", "DR", "DF", "DL", "DB", "FR", "FL", "BL", "BR",
];

/// One of the two independent piece orbits of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum Orbit {
    Corners,
    Edges,
}

impl Orbit {
    /// Number of pieces in the orbit.
    #[must_use]
    pub const fn piece_count(self) -> usize {
        match self {
            Orbit::Corners => CORNERS,
            Orbit::Edges => EDGES,
        }
    }

    /// Number of distinct orientations a piece of this orbit can have.
    #[must_use]
    pub const fn orientation_count(self) -> u8 {
        match self {
            Orbit::Corners => 3,
            Orbit::Edges => 2,
        }
    }

    /// Name of a position in this orbit, if it exists.
    #[must_use]
    pub fn position_name(self, position: u8) -> Option<&'static str> {
        match self {
            Orbit::Corners => CORNER_NAMES.get(position as usize).copied(),
            Orbit::Edges => EDGE_NAMES.get(position as usize).copied(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartsError {
    #[error("{orbit} position {position} holds piece {piece}, expected a value below {}", .orbit.piece_count())]
    PieceOutOfRange { orbit: Orbit, position: usize, piece: u8 },
    #[error("{orbit} position {position} has orientation {orientation}, expected a value below {}", .orbit.orientation_count())]
    OrientationOutOfRange {
        orbit: Orbit,
        position: usize,
        orientation: u8,
    },
    #[error("Invalid {orbit} position {position}, expected a value below {}", .orbit.piece_count())]
    PositionOutOfRange { orbit: Orbit, position: usize },
}

fn check_position(orbit: Orbit, position: usize) -> Result<usize, PartsError> {
    if position < orbit.piece_count() {
        Ok(position)
    } else {
        Err(PartsError::PositionOutOfRange { orbit, position })
    }
}

/// The underlying struct for representing a configuration of the Rubik's Cube.
///
/// `cp[i]` names the piece sitting at position `i` and `co[i]` its twist;
/// likewise `ep`/`eo` for edges. Position numbering follows [`CORNER_NAMES`]
/// and [`EDGE_NAMES`].
///
/// Every entry is always in range, but the arrays need not be bijections or
/// satisfy the orientation sum rules: illegal states can be built on purpose
/// with [`CubeState::from_parts`] and are reported by
/// [`CubeState::legality`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CubeState {
    pub(crate) cp: [u8; CORNERS],
    pub(crate) co: [u8; CORNERS],
    pub(crate) ep: [u8; EDGES],
    pub(crate) eo: [u8; EDGES],
}

/// An owned copy of the four state arrays, for display layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub corner_perm: [u8; CORNERS],
    pub corner_ori: [u8; CORNERS],
    pub edge_perm: [u8; EDGES],
    pub edge_ori: [u8; EDGES],
}

impl Default for CubeState {
    fn default() -> CubeState {
        CubeState::IDENTITY
    }
}

// Both orbit sizes fit comfortably in a u8.
#[allow(clippy::cast_possible_truncation)]
const fn identity_perm<const N: usize>() -> [u8; N] {
    let mut arr = [0; N];
    let mut i = 0;
    while i < N {
        arr[i] = i as u8;
        i += 1;
    }
    arr
}

fn check_orbit<const N: usize>(
    orbit: Orbit,
    perm: &[u8; N],
    ori: &[u8; N],
) -> Result<(), PartsError> {
    if let Some((position, &piece)) = perm
        .iter()
        .enumerate()
        .find(|&(_, &piece)| piece as usize >= N)
    {
        return Err(PartsError::PieceOutOfRange {
            orbit,
            position,
            piece,
        });
    }
    if let Some((position, &orientation)) = ori
        .iter()
        .enumerate()
        .find(|&(_, &orientation)| orientation >= orbit.orientation_count())
    {
        return Err(PartsError::OrientationOutOfRange {
            orbit,
            position,
            orientation,
        });
    }
    Ok(())
}

impl CubeState {
    /// The solved cube.
    pub const IDENTITY: CubeState = CubeState {
        cp: identity_perm(),
        co: [0; CORNERS],
        ep: identity_perm(),
        eo: [0; EDGES],
    };

    /// A new solved cube.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Build a state from raw arrays.
    ///
    /// The arrays may describe an unreachable (illegal) cube; only values that
    /// cannot name a piece or an orientation at all are rejected.
    ///
    /// # Errors
    ///
    /// A permutation entry is not below the orbit size, or an orientation entry
    /// is not below the orbit's orientation count.
    pub fn from_parts(
        corner_perm: [u8; CORNERS],
        corner_ori: [u8; CORNERS],
        edge_perm: [u8; EDGES],
        edge_ori: [u8; EDGES],
    ) -> Result<Self, PartsError> {
        check_orbit(Orbit::Corners, &corner_perm, &corner_ori)?;
        check_orbit(Orbit::Edges, &edge_perm, &edge_ori)?;
        Ok(CubeState {
            cp: corner_perm,
            co: corner_ori,
            ep: edge_perm,
            eo: edge_ori,
        })
    }

    /// The state reached by applying `alg` to the solved cube.
    #[must_use]
    pub fn from_algorithm(alg: &Algorithm) -> Self {
        let mut state = Self::IDENTITY;
        state.apply_algorithm(alg);
        state
    }

    /// Applies a move to the cube in place.
    pub fn apply_move(&mut self, m: Move) {
        *self = algebra::compose(self, algebra::move_table(m));
    }

    /// Applies a sequence of moves, in order. An empty algorithm is a no-op.
    pub fn apply_algorithm(&mut self, alg: &Algorithm) {
        trace!("Applying {} moves: {alg}", alg.len());
        for &m in alg.iter() {
            self.apply_move(m);
        }
    }

    /// Parse `notation` as a whole and only then apply it.
    ///
    /// # Errors
    ///
    /// The notation is malformed. The state is left untouched.
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), ParseError> {
        let alg = parser::parse_algorithm(notation)?;
        self.apply_algorithm(&alg);
        Ok(())
    }

    /// Parse and apply exactly one move.
    ///
    /// # Errors
    ///
    /// The notation is not a single well-formed move. The state is left
    /// untouched.
    pub fn apply_move_notation(&mut self, notation: &str) -> Result<(), ParseError> {
        let m = parser::parse_move(notation)?;
        self.apply_move(m);
        Ok(())
    }

    /// The state equal to applying `self`, then `other`, to the solved cube.
    #[must_use]
    pub const fn compose(&self, other: &Self) -> Self {
        algebra::compose(self, other)
    }

    /// The state that undoes this one, so that `s.compose(&s.inverse())` is
    /// solved. Only meaningful when the state's permutations are bijections.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        algebra::inverse(self)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Check every legality invariant independently, without mutating.
    #[must_use]
    pub fn legality(&self) -> LegalityReport {
        LegalityReport::of(self)
    }

    /// Decompose the corner permutation into disjoint cycles.
    ///
    /// # Errors
    ///
    /// The corner permutation is not a bijection.
    pub fn corner_cycles(&self) -> Result<CycleReport, NotAPermutation> {
        cycles::decompose(Orbit::Corners, &self.cp, &self.co)
    }

    /// Decompose the edge permutation into disjoint cycles.
    ///
    /// # Errors
    ///
    /// The edge permutation is not a bijection.
    pub fn edge_cycles(&self) -> Result<CycleReport, NotAPermutation> {
        cycles::decompose(Orbit::Edges, &self.ep, &self.eo)
    }

    /// The smallest `k >= 1` such that applying this state `k` times to the
    /// solved cube solves it again.
    ///
    /// # Errors
    ///
    /// One of the permutations is not a bijection, so the state has no order.
    pub fn order(&self) -> Result<u64, NotAPermutation> {
        let corners = self.corner_cycles()?.order();
        let edges = self.edge_cycles()?.order();
        Ok(cycles::lcm(corners, edges))
    }

    #[must_use]
    pub fn corner_perm(&self) -> [u8; CORNERS] {
        self.cp
    }

    #[must_use]
    pub fn corner_ori(&self) -> [u8; CORNERS] {
        self.co
    }

    #[must_use]
    pub fn edge_perm(&self) -> [u8; EDGES] {
        self.ep
    }

    #[must_use]
    pub fn edge_ori(&self) -> [u8; EDGES] {
        self.eo
    }

    /// All four arrays at once.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            corner_perm: self.cp,
            corner_ori: self.co,
            edge_perm: self.ep,
            edge_ori: self.eo,
        }
    }

    /// Twist the corner at `position` clockwise `amount` times in place. A lone
    /// twist cannot be produced by face turns and makes the state illegal.
    ///
    /// # Errors
    ///
    /// `position` is not a corner position. The state is left untouched.
    pub fn twist_corner(&mut self, position: usize, amount: u8) -> Result<(), PartsError> {
        let position = check_position(Orbit::Corners, position)?;
        self.co[position] = (self.co[position] + amount % 3) % 3;
        Ok(())
    }

    /// Flip the edge at `position` in place.
    ///
    /// # Errors
    ///
    /// `position` is not an edge position. The state is left untouched.
    pub fn flip_edge(&mut self, position: usize) -> Result<(), PartsError> {
        let position = check_position(Orbit::Edges, position)?;
        self.eo[position] ^= 1;
        Ok(())
    }

    /// Exchange the pieces at two corner positions, orientation included.
    ///
    /// # Errors
    ///
    /// Either position is not a corner position. The state is left untouched.
    pub fn swap_corners(&mut self, a: usize, b: usize) -> Result<(), PartsError> {
        let (a, b) = (
            check_position(Orbit::Corners, a)?,
            check_position(Orbit::Corners, b)?,
        );
        self.cp.swap(a, b);
        self.co.swap(a, b);
        Ok(())
    }

    /// Exchange the pieces at two edge positions, orientation included.
    ///
    /// # Errors
    ///
    /// Either position is not an edge position. The state is left untouched.
    pub fn swap_edges(&mut self, a: usize, b: usize) -> Result<(), PartsError> {
        let (a, b) = (
            check_position(Orbit::Edges, a)?,
            check_position(Orbit::Edges, b)?,
        );
        self.ep.swap(a, b);
        self.eo.swap(a, b);
        Ok(())
    }
}

impl TryFrom<StateSnapshot> for CubeState {
    type Error = PartsError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        CubeState::from_parts(
            snapshot.corner_perm,
            snapshot.corner_ori,
            snapshot.edge_perm,
            snapshot.edge_ori,
        )
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "corner_perm: {:?}", self.cp)?;
        writeln!(f, "corner_ori:  {:?}", self.co)?;
        writeln!(f, "edge_perm:   {:?}", self.ep)?;
        write!(f, "edge_ori:    {:?}", self.eo)
    }
}
