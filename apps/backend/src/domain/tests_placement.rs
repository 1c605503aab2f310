use crate::domain::board::Coord;
use crate::domain::placement::place_units;
use crate::domain::state::{GameState, Phase};
use crate::domain::test_state_helpers::{make_state, MakeStateArgs};
use crate::domain::units::Side;
use crate::errors::domain::DomainError;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn placement_state() -> GameState {
    make_state(
        &[],
        MakeStateArgs {
            phase: Phase::Placement,
            placed: [false, false],
            ..Default::default()
        },
    )
}

#[test]
fn units_land_on_the_home_rank_in_order() {
    let mut state = placement_state();
    place_units(&mut state, Side::A, &labels(&["P1", "P2", "H1", "H2", "P3"])).unwrap();

    for (col, label) in ["P1", "P2", "H1", "H2", "P3"].iter().enumerate() {
        let at = Coord::new(4, col).unwrap();
        let unit = state.board.get(at).expect("unit on A's home rank");
        assert_eq!(unit.side, Side::A);
        assert_eq!(unit.label, *label);
    }
    assert!(state.has_placed(Side::A));
    assert_eq!(state.phase, Phase::Placement);
}

#[test]
fn side_b_places_on_row_zero() {
    let mut state = placement_state();
    place_units(&mut state, Side::B, &labels(&["H1", "P1"])).unwrap();

    assert_eq!(
        state.board.get(Coord::new(0, 0).unwrap()).unwrap().label,
        "H1"
    );
    assert_eq!(
        state.board.get(Coord::new(0, 1).unwrap()).unwrap().label,
        "P1"
    );
    assert_eq!(state.board.count_side(Side::B), 2);
}

#[test]
fn composition_is_not_enforced() {
    // Unknown tokens are placed verbatim; they simply have no movement table.
    let mut state = placement_state();
    place_units(&mut state, Side::A, &labels(&["X9", "P1"])).unwrap();

    let unit = state.board.get(Coord::new(4, 0).unwrap()).unwrap();
    assert_eq!(unit.label, "X9");
    assert_eq!(unit.kind, None);
}

#[test]
fn second_placement_by_the_same_side_is_rejected() {
    let mut state = placement_state();
    place_units(&mut state, Side::A, &labels(&["P1"])).unwrap();

    let err = place_units(&mut state, Side::A, &labels(&["H1"])).unwrap_err();
    assert_eq!(err, DomainError::AlreadyPlaced);
    // The original rank is intact.
    assert_eq!(
        state.board.get(Coord::new(4, 0).unwrap()).unwrap().label,
        "P1"
    );
}

#[test]
fn more_than_five_units_are_rejected() {
    let mut state = placement_state();
    let err = place_units(
        &mut state,
        Side::A,
        &labels(&["P1", "P2", "P3", "P4", "P5", "P6"]),
    )
    .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(state.board.count_side(Side::A), 0);
}

#[test]
fn both_sides_placed_advances_to_playing_with_turn_a() {
    let mut state = placement_state();
    place_units(&mut state, Side::B, &labels(&["P1", "P2"])).unwrap();
    assert_eq!(state.phase, Phase::Placement);

    place_units(&mut state, Side::A, &labels(&["P1", "P2"])).unwrap();
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.turn, Side::A);
}

#[test]
fn placement_outside_the_placement_phase_is_rejected() {
    let mut waiting = make_state(
        &[],
        MakeStateArgs {
            phase: Phase::Waiting,
            placed: [false, false],
            ..Default::default()
        },
    );
    assert_eq!(
        place_units(&mut waiting, Side::A, &labels(&["P1"])).unwrap_err(),
        DomainError::PhaseMismatch
    );

    let mut playing = make_state(&[], MakeStateArgs::default());
    assert_eq!(
        place_units(&mut playing, Side::A, &labels(&["P1"])).unwrap_err(),
        DomainError::PhaseMismatch
    );

    let mut over = make_state(
        &[],
        MakeStateArgs {
            phase: Phase::GameOver { winner: Side::B },
            ..Default::default()
        },
    );
    assert_eq!(
        place_units(&mut over, Side::A, &labels(&["P1"])).unwrap_err(),
        DomainError::SessionTerminated
    );

    let mut abandoned = make_state(
        &[],
        MakeStateArgs {
            phase: Phase::Abandoned,
            ..Default::default()
        },
    );
    assert_eq!(
        place_units(&mut abandoned, Side::A, &labels(&["P1"])).unwrap_err(),
        DomainError::SessionTerminated
    );
}

#[test]
fn empty_list_counts_as_placed() {
    // Up to five, in order; zero is legal and the win check never runs at
    // placement time.
    let mut state = placement_state();
    place_units(&mut state, Side::A, &[]).unwrap();
    place_units(&mut state, Side::B, &labels(&["P1"])).unwrap();
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.board.count_side(Side::A), 0);
}
