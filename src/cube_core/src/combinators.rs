//! Pure sequence algebra over [`Algorithm`]s. Nothing here touches a cube.

use crate::{
    algorithm::Algorithm,
    parser::{ParseError, parse_algorithm},
};
use std::iter;

/// The algorithm that undoes `alg`: moves reversed, each one inverted.
#[must_use]
pub fn invert(alg: &Algorithm) -> Algorithm {
    alg.iter().rev().map(|m| m.inverse()).collect()
}

/// `a b a⁻¹`: perform `b` in the frame set up by `a`.
#[must_use]
pub fn conjugate(a: &Algorithm, b: &Algorithm) -> Algorithm {
    a.concat(b).concat(&invert(a))
}

/// `a b a⁻¹ b⁻¹`. Solved whenever `a` and `b` move disjoint pieces.
#[must_use]
pub fn commutator(a: &Algorithm, b: &Algorithm) -> Algorithm {
    a.concat(b).concat(&invert(a)).concat(&invert(b))
}

/// `alg` repeated `n` times. A negative `n` repeats the inverse, and zero
/// gives the empty algorithm.
#[must_use]
pub fn power(alg: &Algorithm, n: i32) -> Algorithm {
    let base = if n < 0 { invert(alg) } else { alg.clone() };
    iter::repeat_n(base.iter(), n.unsigned_abs() as usize)
        .flatten()
        .copied()
        .collect()
}

/// Text form of [`invert`], with canonical output.
///
/// # Errors
///
/// `alg` does not parse.
pub fn invert_notation(alg: &str) -> Result<String, ParseError> {
    Ok(invert(&parse_algorithm(alg)?).to_string())
}

/// Text form of [`conjugate`], with canonical output.
///
/// # Errors
///
/// Either argument does not parse.
pub fn conjugate_notation(a: &str, b: &str) -> Result<String, ParseError> {
    Ok(conjugate(&parse_algorithm(a)?, &parse_algorithm(b)?).to_string())
}

/// Text form of [`commutator`], with canonical output.
///
/// # Errors
///
/// Either argument does not parse.
pub fn commutator_notation(a: &str, b: &str) -> Result<String, ParseError> {
    Ok(commutator(&parse_algorithm(a)?, &parse_algorithm(b)?).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::CubeState;

    fn alg(s: &str) -> Algorithm {
        s.parse().unwrap()
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(&alg("R U F2 D'")).to_string(), "D F2 U' R'");
        assert!(invert(&Algorithm::empty()).is_empty());
        assert_eq!(invert_notation("R U Rp").unwrap(), "R U' R'");
        assert_eq!(invert_notation("").unwrap(), "");
    }

    #[test]
    fn test_conjugate() {
        assert_eq!(conjugate(&alg("F"), &alg("R U")).to_string(), "F R U F'");
        assert_eq!(conjugate_notation("R", "").unwrap(), "R R'");
    }

    #[test]
    fn test_commutator() {
        assert_eq!(commutator(&alg("R"), &alg("U")).to_string(), "R U R' U'");
        assert_eq!(
            commutator_notation("R U", "D").unwrap(),
            "R U D U' R' D'"
        );
        assert!(CubeState::from_algorithm(&commutator(&alg("U"), &alg("D"))).is_solved());
        assert!(!CubeState::from_algorithm(&commutator(&alg("U"), &alg("R"))).is_solved());
    }

    #[test]
    fn test_power() {
        assert_eq!(power(&alg("R U"), 2).to_string(), "R U R U");
        assert_eq!(power(&alg("R U"), -1), invert(&alg("R U")));
        assert!(power(&alg("R U"), 0).is_empty());
        assert!(CubeState::from_algorithm(&power(&alg("R U"), 105)).is_solved());
        assert!(!CubeState::from_algorithm(&power(&alg("R U"), 35)).is_solved());
    }

    #[test]
    fn test_notation_errors_propagate() {
        assert!(invert_notation("R X").is_err());
        assert!(conjugate_notation("R", "U3").is_err());
        assert!(commutator_notation("R''", "U").is_err());
    }
}
