//! The permutation/orientation algebra.
//!
//! A cube state doubles as the transformation that produces it from the solved
//! cube, so a move table is just a [`CubeState`]. Tables are stored in "is
//! replaced by" form: after a move, position `i` holds whatever was at position
//! `cp[i]`, twisted by `co[i]`. Composition therefore reads
//!
//! ```text
//! (a * b).cp[i] = a.cp[b.cp[i]]
//! (a * b).co[i] = a.co[b.cp[i]] + b.co[i]   (mod 3; mod 2 for edges)
//! ```
//!
//! which carries each piece's orientation along with it.

use crate::cube::{CORNERS, CubeState, EDGES};
use crate::moves::Move;

// Corner positions
const URF: u8 = 0;
const UFL: u8 = 1;
const ULB: u8 = 2;
const UBR: u8 = 3;
const DFR: u8 = 4;
const DLF: u8 = 5;
const DBL: u8 = 6;
const DRB: u8 = 7;

// Edge positions
const UR: u8 = 0;
const UF: u8 = 1;
const UL: u8 = 2;
const UB: u8 = 3;
const DR: u8 = 4;
const DF: u8 = 5;
const DL: u8 = 6;
const DB: u8 = 7;
const FR: u8 = 8;
const FL: u8 = 9;
const BL: u8 = 10;
const BR: u8 = 11;

const MOVE_U: CubeState = CubeState {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

const MOVE_D: CubeState = CubeState {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

const MOVE_L: CubeState = CubeState {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

const MOVE_R: CubeState = CubeState {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

const MOVE_F: CubeState = CubeState {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

const MOVE_B: CubeState = CubeState {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// Clockwise quarter turns, indexed by `Face as usize`.
const QUARTER_TURNS: [CubeState; 6] = [MOVE_U, MOVE_D, MOVE_L, MOVE_R, MOVE_F, MOVE_B];

/// All eighteen move tables, indexed by [`Move::index`]. Half turns and
/// counter-clockwise turns are derived by composing the quarter turn with
/// itself, never written out by hand.
pub(crate) const MOVE_TABLES: [CubeState; 18] = {
    let mut tables = [CubeState::IDENTITY; 18];
    let mut face = 0;
    while face < QUARTER_TURNS.len() {
        let quarter = QUARTER_TURNS[face];
        let double = compose(&quarter, &quarter);
        let prime = compose(&double, &quarter);
        tables[face * 3] = quarter;
        tables[face * 3 + 1] = prime;
        tables[face * 3 + 2] = double;
        face += 1;
    }
    tables
};

/// The table for a single move.
#[must_use]
pub fn move_table(m: Move) -> &'static CubeState {
    &MOVE_TABLES[m.index()]
}

const fn compose_orbit<const N: usize>(
    a_perm: &[u8; N],
    a_ori: &[u8; N],
    b_perm: &[u8; N],
    b_ori: &[u8; N],
    orientation_count: u8,
) -> ([u8; N], [u8; N]) {
    let mut perm = [0; N];
    let mut ori = [0; N];
    let mut i = 0;
    while i < N {
        let from = b_perm[i] as usize;
        perm[i] = a_perm[from];
        ori[i] = (a_ori[from] + b_ori[i]) % orientation_count;
        i += 1;
    }
    (perm, ori)
}

// N is at most 12.
#[allow(clippy::cast_possible_truncation)]
const fn inverse_orbit<const N: usize>(
    perm: &[u8; N],
    ori: &[u8; N],
    orientation_count: u8,
) -> ([u8; N], [u8; N]) {
    let mut inv_perm = [0; N];
    let mut inv_ori = [0; N];
    let mut i = 0;
    while i < N {
        let to = perm[i] as usize;
        inv_perm[to] = i as u8;
        inv_ori[to] = (orientation_count - ori[i] % orientation_count) % orientation_count;
        i += 1;
    }
    (inv_perm, inv_ori)
}

/// Apply `a`, then `b`.
#[must_use]
pub(crate) const fn compose(a: &CubeState, b: &CubeState) -> CubeState {
    let (cp, co) = compose_orbit::<CORNERS>(&a.cp, &a.co, &b.cp, &b.co, 3);
    let (ep, eo) = compose_orbit::<EDGES>(&a.ep, &a.eo, &b.ep, &b.eo, 2);
    CubeState { cp, co, ep, eo }
}

/// The state that undoes `a`. Only meaningful when both of `a`'s permutations
/// are bijections; otherwise the result is some other in-range state.
#[must_use]
pub(crate) const fn inverse(a: &CubeState) -> CubeState {
    let (cp, co) = inverse_orbit::<CORNERS>(&a.cp, &a.co, 3);
    let (ep, eo) = inverse_orbit::<EDGES>(&a.ep, &a.eo, 2);
    CubeState { cp, co, ep, eo }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_move;
    use crate::moves::{ALL_MOVES, Face};

    #[test]
    fn test_quarter_turns_have_order_four() {
        for face in Face::ALL {
            let quarter = QUARTER_TURNS[face as usize];
            let mut acc = CubeState::IDENTITY;
            for i in 1..=4 {
                acc = compose(&acc, &quarter);
                assert_eq!(acc == CubeState::IDENTITY, i == 4, "{face} to the {i}");
            }
        }
    }

    #[test]
    fn test_tables_preserve_orientation_sums() {
        for m in ALL_MOVES {
            let table = move_table(m);
            assert_eq!(table.co.iter().map(|&o| u32::from(o)).sum::<u32>() % 3, 0);
            assert_eq!(table.eo.iter().map(|&o| u32::from(o)).sum::<u32>() % 2, 0);
        }
    }

    #[test]
    fn test_prime_is_inverse_of_normal() {
        for face in Face::ALL {
            let normal = move_table(Move::new(face, crate::moves::Direction::Normal));
            let prime = move_table(Move::new(face, crate::moves::Direction::Prime));
            assert_eq!(&inverse(normal), prime);
            assert_eq!(compose(normal, prime), CubeState::IDENTITY);
        }
    }

    #[test]
    fn test_u_and_d_do_not_orient() {
        for m in [cube_move!(U, Normal), cube_move!(D, Prime), cube_move!(U, Double)] {
            let table = move_table(m);
            assert_eq!(table.co, [0; CORNERS]);
            assert_eq!(table.eo, [0; EDGES]);
        }
    }

    #[test]
    fn test_opposite_faces_commute() {
        for face in Face::ALL {
            let a = &QUARTER_TURNS[face as usize];
            let b = &QUARTER_TURNS[face.opposite() as usize];
            assert_eq!(compose(a, b), compose(b, a));
        }
        assert_ne!(
            compose(&MOVE_U, &MOVE_R),
            compose(&MOVE_R, &MOVE_U),
            "adjacent faces do not commute"
        );
    }

    #[test]
    fn test_orientation_follows_piece() {
        // F then U: the corners F twisted are carried around by U.
        let state = compose(&MOVE_F, &MOVE_U);
        assert_eq!(state.cp, [UBR, UFL, DLF, ULB, URF, DFR, DBL, DRB]);
        assert_eq!(state.co, [0, 1, 2, 0, 2, 1, 0, 0]);
        assert_eq!(state.ep, [UB, UR, FL, UL, DR, FR, DL, DB, UF, DF, BL, BR]);
        assert_eq!(state.eo, [0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0]);
    }
}
