//! Checks a state against the invariants every reachable cube satisfies.

use crate::cube::CubeState;
use bitflags::bitflags;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The set of invariants a state breaks.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Violations: u8 {
        /// The corner permutation is not a bijection.
        const CORNER_PERMUTATION = 1;
        /// The edge permutation is not a bijection.
        const EDGE_PERMUTATION = 1 << 1;
        /// Corner twists do not sum to 0 mod 3.
        const CORNER_TWIST = 1 << 2;
        /// Edge flips do not sum to 0 mod 2.
        const EDGE_FLIP = 1 << 3;
        /// Corner and edge permutations have different parities.
        const PARITY = 1 << 4;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

/// The outcome of every legality check, plus the raw values behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalityReport {
    pub violations: Violations,
    /// Sum of corner twists, mod 3.
    pub corner_twist: u8,
    /// Sum of edge flips, mod 2.
    pub edge_flip: u8,
    /// `None` when the corner permutation is not a bijection.
    pub corner_parity: Option<Parity>,
    /// `None` when the edge permutation is not a bijection.
    pub edge_parity: Option<Parity>,
}

fn orientation_sum(ori: &[u8], orientation_count: u8) -> u8 {
    ori.iter().fold(0, |acc, &o| (acc + o) % orientation_count)
}

impl LegalityReport {
    pub(crate) fn of(state: &CubeState) -> Self {
        let corner_parity = state.corner_cycles().ok().map(|c| c.parity());
        let edge_parity = state.edge_cycles().ok().map(|c| c.parity());
        let corner_twist = orientation_sum(&state.co, 3);
        let edge_flip = orientation_sum(&state.eo, 2);

        let mut violations = Violations::empty();
        violations.set(Violations::CORNER_PERMUTATION, corner_parity.is_none());
        violations.set(Violations::EDGE_PERMUTATION, edge_parity.is_none());
        violations.set(Violations::CORNER_TWIST, corner_twist != 0);
        violations.set(Violations::EDGE_FLIP, edge_flip != 0);
        // Parity only means something once both orbits are permutations.
        if let (Some(c), Some(e)) = (corner_parity, edge_parity) {
            violations.set(Violations::PARITY, c != e);
        }

        let report = LegalityReport {
            violations,
            corner_twist,
            edge_flip,
            corner_parity,
            edge_parity,
        };
        if !report.is_legal() {
            debug!("Illegal state: {report}");
        }
        report
    }

    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.violations.is_empty()
    }
}

impl std::fmt::Display for LegalityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_legal() {
            return write!(f, "legal");
        }
        let problems = [
            (
                Violations::CORNER_PERMUTATION,
                "corner permutation is not a bijection".to_owned(),
            ),
            (
                Violations::EDGE_PERMUTATION,
                "edge permutation is not a bijection".to_owned(),
            ),
            (
                Violations::CORNER_TWIST,
                format!("corner twist sums to {} mod 3", self.corner_twist),
            ),
            (
                Violations::EDGE_FLIP,
                format!("edge flip sums to {} mod 2", self.edge_flip),
            ),
            (
                Violations::PARITY,
                "corner and edge permutation parities differ".to_owned(),
            ),
        ]
        .into_iter()
        .filter(|(flag, _)| self.violations.contains(*flag))
        .map(|(_, problem)| problem);
        write!(f, "illegal: {}", problems.format(", "))
    }
}
