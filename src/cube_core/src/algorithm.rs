//! Move sequences and seeded random scrambles.

use crate::{
    moves::{ALL_MOVES, Move},
    parser::{self, ParseError},
};
use itertools::Itertools;
use std::{ops::Deref, str::FromStr};

/// A sequence of moves, used for scrambles, algorithms, and anything built
/// from them with the combinators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm(Vec<Move>);

impl Algorithm {
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Self {
        Self(moves)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &Algorithm) -> Self {
        self.iter().chain(other.iter()).copied().collect()
    }

    pub fn push(&mut self, m: Move) {
        self.0.push(m);
    }

    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.0
    }

    /// Faces that may not be turned next, as a bitmask indexed by
    /// `Face as u8`.
    ///
    /// Turning the last face again is redundant (`R R'`), and so is turning a
    /// face, its opposite, and the face again (`R L R` is `R2 L`).
    fn blocked_faces(&self) -> u8 {
        match self.0.as_slice() {
            [] => 0,
            [.., prev, last] if prev.face == last.face.opposite() => {
                (1 << last.face as u8) | (1 << prev.face as u8)
            }
            [.., last] => 1 << last.face as u8,
        }
    }

    /// A random sequence of `len` moves with no redundant face turns, as used
    /// for scrambling.
    #[must_use]
    pub fn random(rng: &mut fastrand::Rng, len: usize) -> Self {
        let mut alg = Algorithm(Vec::with_capacity(len));
        for _ in 0..len {
            let blocked = alg.blocked_faces();
            // At most two faces are ever blocked, so this is never empty.
            let candidates = ALL_MOVES
                .into_iter()
                .filter(|m| blocked & (1 << m.face as u8) == 0)
                .collect_vec();
            alg.push(candidates[rng.usize(..candidates.len())]);
        }
        alg
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl Deref for Algorithm {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_algorithm(s)
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Move> for Algorithm {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Algorithm {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cube_move, moves::Face};

    #[test]
    fn test_display_is_canonical() {
        let alg: Algorithm = "R  U’ Fp\tB2".parse().unwrap();
        assert_eq!(alg.to_string(), "R U' F' B2");
        assert_eq!(Algorithm::empty().to_string(), "");
    }

    #[test]
    fn test_concat_and_extend() {
        let a: Algorithm = "R U".parse().unwrap();
        let b: Algorithm = "F'".parse().unwrap();
        assert_eq!(a.concat(&b).to_string(), "R U F'");
        assert_eq!(a.concat(&Algorithm::empty()), a);

        let mut c = a.clone();
        c.extend(b.iter().copied());
        assert_eq!(c, a.concat(&b));
        assert_eq!(c.into_moves().last(), Some(&cube_move!(F, Prime)));
    }

    #[test]
    fn test_blocked_faces() {
        let bit = |face: Face| 1 << face as u8;
        assert_eq!(Algorithm::empty().blocked_faces(), 0);
        let alg: Algorithm = "R".parse().unwrap();
        assert_eq!(alg.blocked_faces(), bit(Face::R));
        let alg: Algorithm = "R L".parse().unwrap();
        assert_eq!(alg.blocked_faces(), bit(Face::R) | bit(Face::L));
        let alg: Algorithm = "R U".parse().unwrap();
        assert_eq!(alg.blocked_faces(), bit(Face::U));
    }

    #[test]
    fn test_random_has_no_redundant_turns() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let alg = Algorithm::random(&mut rng, 30);
            assert_eq!(alg.len(), 30);
            for (a, b) in alg.iter().tuple_windows() {
                assert_ne!(a.face, b.face, "{alg}");
            }
            for (a, b, c) in alg.iter().tuple_windows() {
                assert!(
                    !(a.face == c.face && b.face == a.face.opposite()),
                    "{alg}"
                );
            }
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Algorithm::random(&mut fastrand::Rng::with_seed(42), 25);
        let b = Algorithm::random(&mut fastrand::Rng::with_seed(42), 25);
        assert_eq!(a, b);
        assert!(Algorithm::random(&mut fastrand::Rng::with_seed(1), 0).is_empty());
    }
}
