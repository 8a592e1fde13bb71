use cube_core::{
    Algorithm, CORNERS, CubeState, EDGES, Face, ParseError, Violations, commutator,
    commutator_notation, conjugate, conjugate_notation, invert, invert_notation,
    moves::{Direction, Move},
    parse_algorithm, power,
};
use itertools::Itertools;
use log::info;
use pretty_assertions::assert_eq;

fn state(notation: &str) -> CubeState {
    let mut cube = CubeState::identity();
    cube.apply_notation(notation).unwrap();
    cube
}

#[test_log::test]
fn every_face_has_order_four() {
    for face in Face::ALL {
        let quarter = Move::new(face, Direction::Normal);
        let double = Move::new(face, Direction::Double);

        let mut cube = CubeState::identity();
        for _ in 0..4 {
            cube.apply_move(quarter);
        }
        assert!(cube.is_solved(), "{face}4");

        cube.apply_move(double);
        assert!(!cube.is_solved());
        cube.apply_move(double);
        assert!(cube.is_solved(), "{face}2 {face}2");
    }
}

#[test_log::test]
fn u_turn_report() {
    let cube = state("U");
    let corners = cube.corner_cycles().unwrap();
    let edges = cube.edge_cycles().unwrap();

    assert_eq!(corners.cycles.len(), 1);
    assert_eq!(corners.cycles[0].positions, vec![0, 3, 2, 1]);
    assert_eq!(corners.cycles[0].twist, 0);
    assert_eq!(
        corners.fixed_points.iter().map(|f| f.position).collect_vec(),
        vec![4, 5, 6, 7]
    );
    assert_eq!(edges.cycles.len(), 1);
    assert_eq!(edges.cycles[0].len(), 4);
    assert_eq!(edges.cycles[0].twist, 0);
    assert_eq!(cube.corner_ori(), [0; CORNERS]);
    assert_eq!(cube.edge_ori(), [0; EDGES]);
}

#[test_log::test]
fn inverse_notation_uses_canonical_prime() {
    assert_eq!(invert_notation("R U Rp").unwrap(), "R U' R'");
    assert_eq!(invert_notation("R’ U2 F").unwrap(), "F' U2 R");
}

#[test_log::test]
fn algorithm_then_inverse_is_solved() {
    for notation in [
        "R U R' U'",
        "R U R' U' R' F R2 U' R' U' R U R' F'",
        "F B' L2 D U R' F2 B L' D2",
    ] {
        let alg = parse_algorithm(notation).unwrap();
        let mut cube = CubeState::from_algorithm(&alg);
        assert!(!cube.is_solved());
        cube.apply_algorithm(&invert(&alg));
        assert!(cube.is_solved(), "{notation}");
    }
}

#[test_log::test]
fn t_perm_swaps_two_corners_and_two_edges() {
    let cube = state("R U R' U' R' F R2 U' R' U' R U R' F'");
    assert_eq!(cube.corner_perm(), [3, 1, 2, 0, 4, 5, 6, 7]);
    assert_eq!(cube.edge_perm(), [2, 1, 0, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    assert_eq!(cube.corner_ori(), [0; CORNERS]);
    assert_eq!(cube.edge_ori(), [0; EDGES]);
    assert_eq!(cube.order(), Ok(2));
    assert!(cube.legality().is_legal());
}

#[test_log::test]
fn disjoint_commutator_is_solved() {
    let a = parse_algorithm("U").unwrap();
    let b = parse_algorithm("D2").unwrap();
    assert!(CubeState::from_algorithm(&commutator(&a, &b)).is_solved());
    assert!(state(&commutator_notation("R L'", "R2").unwrap()).is_solved());
}

#[test_log::test]
fn conjugate_keeps_cycle_shape() {
    let a = parse_algorithm("F").unwrap();
    let b = parse_algorithm("R U R' U'").unwrap();
    let conjugated = CubeState::from_algorithm(&conjugate(&a, &b));
    let plain = CubeState::from_algorithm(&b);
    assert_eq!(conjugated.order(), plain.order());
    assert_eq!(
        conjugated.edge_cycles().unwrap().cycle_type(),
        plain.edge_cycles().unwrap().cycle_type()
    );
    assert_eq!(conjugate_notation("F", "R U").unwrap(), "F R U F'");
}

#[test_log::test]
fn known_orders() {
    for (notation, order) in [
        ("", 1),
        ("R", 4),
        ("R2", 2),
        ("R U R' U'", 6),
        ("R U", 105),
        ("R U2 D' B D'", 1260),
    ] {
        let cube = state(notation);
        info!("{notation:?} has order {order}");
        assert_eq!(cube.order(), Ok(order), "{notation}");
        let alg = parse_algorithm(notation).unwrap();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let repeated = power(&alg, order as i32);
        assert!(CubeState::from_algorithm(&repeated).is_solved());
    }
}

#[test_log::test]
fn single_twist_is_flagged() {
    let mut cube = CubeState::identity();
    cube.twist_corner(3, 1).unwrap();
    let report = cube.legality();
    assert!(!report.is_legal());
    assert_eq!(report.violations, Violations::CORNER_TWIST);
    assert!(!cube.is_solved());
}

#[test_log::test]
fn failed_parse_applies_nothing() {
    let mut cube = state("R U");
    let before = cube.snapshot();
    let err = cube.apply_notation("R U2 F3 B").unwrap_err();
    assert!(matches!(err, ParseError::InvalidModifier { modifier: '3', .. }));
    assert_eq!(err.token().unwrap().index, 2);
    assert_eq!(err.token().unwrap().span, 5..7);
    assert_eq!(cube.snapshot(), before);
}

#[test_log::test]
fn snapshot_round_trips_through_parts() {
    let cube = state("F U");
    let snapshot = cube.snapshot();
    assert_eq!(snapshot.corner_perm, [3, 1, 5, 2, 0, 4, 6, 7]);
    assert_eq!(snapshot.corner_ori, [0, 1, 2, 0, 2, 1, 0, 0]);
    assert_eq!(snapshot.edge_perm, [3, 0, 9, 2, 4, 8, 6, 7, 1, 5, 10, 11]);
    assert_eq!(snapshot.edge_ori, [0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0]);
    assert_eq!(CubeState::try_from(snapshot), Ok(cube));
}

#[test_log::test]
fn random_scramble_is_legal() {
    let mut rng = fastrand::Rng::with_seed(2024);
    for _ in 0..20 {
        let scramble = Algorithm::random(&mut rng, 25);
        let cube = CubeState::from_algorithm(&scramble);
        assert!(cube.legality().is_legal(), "{scramble}");
        assert_eq!(parse_algorithm(&scramble.to_string()), Ok(scramble));
    }
}
