//! Domain-level error type used across the registry, game flow, and ws layers.
//!
//! This error type is transport-agnostic. The ws layer converts it to a wire
//! `ErrorCode` via `ErrorCode::from`; the HTTP shell converts it to
//! `crate::error::AppError` using the provided `From` implementation.
//!
//! Every variant is recoverable and scoped to a single intent: a rejected
//! intent produces a unicast response to its originator and never invalidates
//! the session or the registry.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::registry::SessionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced unit identifier is not on the board.
    UnitNotFound(String),
    /// No live session with the given id (stale client state).
    GameNotFound(SessionId),
    /// The acting connection is not a participant of the session.
    NotAParticipant,
    /// The acting side does not own the referenced unit.
    NotYourUnit,
    /// It is not the acting side's turn.
    OutOfTurn,
    /// The direction is not in the unit's movement table.
    IllegalDirection,
    /// The destination leaves the 5x5 grid.
    OutOfBounds,
    /// The destination already holds a unit of the acting side.
    DestinationOccupied,
    /// The side already placed its units this game.
    AlreadyPlaced,
    /// The session already has two players.
    SessionFull,
    /// The session is finished or abandoned and accepts no further intents.
    SessionTerminated,
    /// The intent is not valid in the current phase.
    PhaseMismatch,
    /// Malformed input (too many units, empty identifier, ...).
    Validation(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::UnitNotFound(unit) => write!(f, "unit not found: {unit}"),
            DomainError::GameNotFound(id) => write!(f, "game not found: {id}"),
            DomainError::NotAParticipant => write!(f, "not a participant of this game"),
            DomainError::NotYourUnit => write!(f, "not your unit"),
            DomainError::OutOfTurn => write!(f, "out of turn"),
            DomainError::IllegalDirection => write!(f, "illegal direction for this unit"),
            DomainError::OutOfBounds => write!(f, "destination is off the board"),
            DomainError::DestinationOccupied => write!(f, "destination occupied by own unit"),
            DomainError::AlreadyPlaced => write!(f, "units already placed"),
            DomainError::SessionFull => write!(f, "session is full"),
            DomainError::SessionTerminated => write!(f, "session is over"),
            DomainError::PhaseMismatch => write!(f, "phase mismatch"),
            DomainError::Validation(s) => write!(f, "validation error: {s}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
