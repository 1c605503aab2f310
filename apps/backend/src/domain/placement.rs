use crate::domain::board::{Coord, GRID_SIZE};
use crate::domain::state::{GameState, Phase};
use crate::domain::units::{Side, Unit};
use crate::errors::domain::DomainError;

/// Places up to five units along the caller's home rank, column = index in
/// `labels`, in the order supplied.
///
/// Composition is deliberately unchecked: any label list is placed verbatim,
/// and labels with no recognizable kind simply can never move. A side places
/// exactly once; when both sides have placed, the phase advances to
/// `Playing` with the first turn going to A.
pub fn place_units(
    state: &mut GameState,
    side: Side,
    labels: &[String],
) -> Result<(), DomainError> {
    match state.phase {
        Phase::Placement => {}
        Phase::GameOver { .. } | Phase::Abandoned => return Err(DomainError::SessionTerminated),
        Phase::Waiting | Phase::Playing => return Err(DomainError::PhaseMismatch),
    }

    if state.has_placed(side) {
        return Err(DomainError::AlreadyPlaced);
    }
    if labels.len() > GRID_SIZE {
        return Err(DomainError::validation(format!(
            "at most {GRID_SIZE} units may be placed, got {}",
            labels.len()
        )));
    }

    let row = side.home_row();
    for (col, label) in labels.iter().enumerate() {
        let at = Coord::new(row, col).ok_or_else(|| {
            DomainError::validation("invariant violated: home rank column off the board")
        })?;
        state.board.set(at, Unit::new(side, label.clone()));
    }
    state.mark_placed(side);

    if state.placed_count() == 2 {
        state.phase = Phase::Playing;
        state.turn = Side::A;
    }
    Ok(())
}
