use crate::domain::board::Coord;
use crate::domain::movement::{self, Direction};
use crate::domain::state::{GameState, Phase};
use crate::domain::units::{Side, Unit};
use crate::errors::domain::DomainError;

/// Result of a successful move, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Coord,
    pub to: Coord,
    /// Opposing unit removed from the destination cell, if any.
    pub captured: Option<Unit>,
    /// Set when the capture removed the opposing side's last unit.
    pub winner: Option<Side>,
}

/// Validates and applies one move for `side`, enforcing ownership, turn
/// order, the unit's movement table, bounds, and the capture rule.
///
/// The turn check lives here, inside the mutating function, so that callers
/// serializing intents on the session lock cannot validate against a stale
/// pre-move state. A rejected move leaves `state` untouched.
///
/// The destination rule: an opposing occupant is captured; a friendly
/// occupant rejects the move with `DestinationOccupied`.
pub fn apply_move(
    state: &mut GameState,
    side: Side,
    unit_ref: &str,
    direction: Direction,
) -> Result<MoveOutcome, DomainError> {
    match state.phase {
        Phase::Playing => {}
        Phase::GameOver { .. } | Phase::Abandoned => return Err(DomainError::SessionTerminated),
        Phase::Waiting | Phase::Placement => return Err(DomainError::PhaseMismatch),
    }

    let (from, unit) = state
        .board
        .find_token(unit_ref)
        .ok_or_else(|| DomainError::UnitNotFound(unit_ref.to_string()))?;
    let owner = unit.side;
    let kind = unit.kind;

    if owner != side {
        return Err(DomainError::NotYourUnit);
    }
    if state.turn != side {
        return Err(DomainError::OutOfTurn);
    }

    // A unit with no recognizable kind has an empty movement table.
    let kind = kind.ok_or(DomainError::IllegalDirection)?;
    let (drow, dcol) = movement::step(kind, direction).ok_or(DomainError::IllegalDirection)?;
    let to = from.offset(drow, dcol).ok_or(DomainError::OutOfBounds)?;

    if let Some(occupant) = state.board.get(to) {
        if occupant.side == side {
            return Err(DomainError::DestinationOccupied);
        }
    }

    // Validation is complete; mutate.
    let captured = state.board.take(to);
    let mover = state
        .board
        .take(from)
        .ok_or_else(|| DomainError::validation("invariant violated: origin cell empty"))?;
    state.board.set(to, mover);

    let winner = (state.board.count_side(side.opponent()) == 0).then_some(side);
    match winner {
        Some(winner) => state.phase = Phase::GameOver { winner },
        None => state.turn = side.opponent(),
    }

    Ok(MoveOutcome {
        from,
        to,
        captured,
        winner,
    })
}
