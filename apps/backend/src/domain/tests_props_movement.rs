//! Property-based tests for the movement table and move application.

use proptest::prelude::*;

use crate::domain::movement::{step, Direction};
use crate::domain::moves::apply_move;
use crate::domain::test_gens;
use crate::domain::test_state_helpers::{label_for, make_state, MakeStateArgs};
use crate::domain::units::{Side, UnitKind};

proptest! {
    /// Property: step magnitude matches the unit class.
    /// Pawns move one cell along an axis; both hero kinds move two per axis
    /// they use.
    #[test]
    fn prop_step_magnitude(kind in test_gens::unit_kind(), direction in test_gens::direction()) {
        if let Some((drow, dcol)) = step(kind, direction) {
            match kind {
                UnitKind::Pawn => {
                    prop_assert_eq!(drow.abs() + dcol.abs(), 1);
                }
                UnitKind::HeroOrthogonal => {
                    prop_assert_eq!(drow.abs() + dcol.abs(), 2);
                    prop_assert!(drow == 0 || dcol == 0);
                }
                UnitKind::HeroDiagonal => {
                    prop_assert_eq!(drow.abs(), 2);
                    prop_assert_eq!(dcol.abs(), 2);
                }
            }
        }
    }

    /// Property: the table is symmetric. Every legal delta has its exact
    /// opposite under the opposite direction token.
    #[test]
    fn prop_opposite_directions_cancel(kind in test_gens::unit_kind()) {
        let opposites = [
            (Direction::F, Direction::B),
            (Direction::L, Direction::R),
            (Direction::FL, Direction::BR),
            (Direction::FR, Direction::BL),
        ];
        for (a, b) in opposites {
            match (step(kind, a), step(kind, b)) {
                (Some((ar, ac)), Some((br, bc))) => {
                    prop_assert_eq!((ar, ac), (-br, -bc));
                }
                (None, None) => {}
                other => prop_assert!(false, "asymmetric table entry: {:?}", other),
            }
        }
    }

    /// Property: on a board holding only the mover (plus a far-corner enemy
    /// so the game cannot end), a move succeeds exactly when the table has
    /// the direction and the destination stays on the board; on success the
    /// origin is empty and the unit sits at origin + delta, on failure the
    /// state is untouched.
    #[test]
    fn prop_apply_move_matches_the_table(
        from in test_gens::coord(),
        kind in test_gens::unit_kind(),
        direction in test_gens::direction(),
    ) {
        // Keep the enemy anchor off the mover's cell and any destination.
        prop_assume!(from != crate::domain::board::Coord::new(0, 0).unwrap());
        let label = label_for(kind);
        let mut state = make_state(
            &[(from.row(), from.col(), Side::A, label), (0, 0, Side::B, "P1")],
            MakeStateArgs::default(),
        );
        let before = state.clone();
        let unit_ref = format!("A-{label}");

        let expected = step(kind, direction).and_then(|(drow, dcol)| from.offset(drow, dcol));
        let result = apply_move(&mut state, Side::A, &unit_ref, direction);

        match expected {
            // The enemy anchor at (0,0) may be captured; either way the
            // mover must land on the expected cell.
            Some(to) => {
                let outcome = result.expect("legal move per the table");
                prop_assert_eq!(outcome.to, to);
                prop_assert!(state.board.get(from).is_none());
                let landed = state.board.get(to).expect("mover at destination");
                prop_assert_eq!(landed.side, Side::A);
            }
            None => {
                let err = result.expect_err("move off-table or off-board");
                prop_assert!(matches!(
                    err,
                    crate::errors::domain::DomainError::IllegalDirection
                        | crate::errors::domain::DomainError::OutOfBounds
                ));
                prop_assert_eq!(state, before);
            }
        }
    }

    /// Property: a successful move only ever removes the captured unit.
    /// Total unit count drops by exactly one on capture and stays put
    /// otherwise.
    #[test]
    fn prop_captures_account_for_every_removed_unit(
        from in test_gens::coord(),
        direction in test_gens::direction(),
    ) {
        let mut state = make_state(
            &[(from.row(), from.col(), Side::A, "H2"), (0, 0, Side::B, "P1"), (4, 4, Side::B, "P2")],
            MakeStateArgs::default(),
        );
        prop_assume!(state.board.count_side(Side::A) == 1);
        prop_assume!(state.board.count_side(Side::B) == 2);
        let total_before = state.board.units().count();

        if let Ok(outcome) = apply_move(&mut state, Side::A, "A-H2", direction) {
            let total_after = state.board.units().count();
            let captured = usize::from(outcome.captured.is_some());
            prop_assert_eq!(total_after, total_before - captured);
        }
    }
}
