//! Disjoint cycle decomposition of one orbit of a state.
//!
//! Positions are scanned in ascending order and every cycle starts at the
//! lowest position not yet visited, so a decomposition is deterministic. A cycle
//! follows the permutation array: `p0 -> perm[p0] -> perm[perm[p0]] -> ...`.

use crate::{cube::Orbit, legality::Parity};
use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid {0} permutation, expected a bijection")]
pub struct NotAPermutation(pub Orbit);

/// A cycle of two or more positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cycle {
    pub positions: Vec<u8>,
    /// Net orientation a piece picks up going once around the cycle.
    pub twist: u8,
}

/// A position whose piece stays put, possibly twisted in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedPoint {
    pub position: u8,
    pub twist: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    pub orbit: Orbit,
    /// In the order they were started.
    pub cycles: Vec<Cycle>,
    /// In ascending order.
    pub fixed_points: Vec<FixedPoint>,
}

pub(crate) fn is_bijection(perm: &[u8]) -> bool {
    let mut seen = vec![false; perm.len()];
    perm.iter().all(|&p| {
        let Some(slot) = seen.get_mut(p as usize) else {
            return false;
        };
        !std::mem::replace(slot, true)
    })
}

pub(crate) fn decompose(
    orbit: Orbit,
    perm: &[u8],
    ori: &[u8],
) -> Result<CycleReport, NotAPermutation> {
    if !is_bijection(perm) {
        return Err(NotAPermutation(orbit));
    }
    let orientation_count = orbit.orientation_count();

    let mut covered = vec![false; perm.len()];
    let mut cycles = vec![];
    let mut fixed_points = vec![];

    for start in 0..perm.len() {
        if covered[start] {
            continue;
        }

        covered[start] = true;
        let mut positions = vec![start];
        let mut twist = ori[start];

        let mut current = start;

        loop {
            let next = perm[current] as usize;

            if next == start {
                break;
            }

            covered[next] = true;
            twist = (twist + ori[next]) % orientation_count;
            positions.push(next);
            current = next;
        }

        // Orbits have at most 12 positions.
        #[allow(clippy::cast_possible_truncation)]
        let positions = positions.into_iter().map(|p| p as u8).collect_vec();
        if let [position] = positions[..] {
            fixed_points.push(FixedPoint { position, twist });
        } else {
            cycles.push(Cycle { positions, twist });
        }
    }

    trace!("Found {} {orbit} cycles", cycles.len());
    Ok(CycleReport {
        orbit,
        cycles,
        fixed_points,
    })
}

pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub(crate) fn lcm(a: u64, b: u64) -> u64 {
    b / gcd(a, b) * a
}

impl Cycle {
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl CycleReport {
    /// Cycle lengths paired with whether the cycle twists its pieces, sorted.
    /// Twisted fixed points count as cycles of length one; untwisted ones are
    /// left out.
    #[must_use]
    pub fn cycle_type(&self) -> Vec<(usize, bool)> {
        self.cycles
            .iter()
            .map(|c| (c.len(), c.twist != 0))
            .chain(
                self.fixed_points
                    .iter()
                    .filter(|f| f.twist != 0)
                    .map(|_| (1, true)),
            )
            .sorted()
            .collect()
    }

    /// How many times this orbit's permutation must be repeated to return
    /// every piece home with its starting orientation.
    #[must_use]
    pub fn order(&self) -> u64 {
        let n = u64::from(self.orbit.orientation_count());
        let period = |len: usize, twist: u8| len as u64 * n / gcd(u64::from(twist), n);
        self.cycles
            .iter()
            .map(|c| period(c.len(), c.twist))
            .chain(self.fixed_points.iter().map(|f| period(1, f.twist)))
            .fold(1, lcm)
    }

    #[must_use]
    pub fn parity(&self) -> Parity {
        let transpositions: usize = self.cycles.iter().map(|c| c.len() - 1).sum();
        if transpositions % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.positions.iter().join(" "))?;
        if self.twist != 0 {
            write!(f, "+{}", self.twist)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for CycleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cycles.is_empty() {
            write!(f, "{}: none", self.orbit)
        } else {
            write!(f, "{}: {}", self.orbit, self.cycles.iter().join(" "))
        }
    }
}
