//! Error codes for the Skirmish backend wire protocol.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in `move_rejected` and `error` frames.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Centralized error codes for the Skirmish backend wire protocol.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Move rejections
    /// Referenced unit is not on the board
    UnitNotFound,
    /// Acting side does not own the referenced unit
    NotYourUnit,
    /// It is not the acting side's turn
    OutOfTurn,
    /// Direction is not in the unit's movement table
    IllegalDirection,
    /// Destination leaves the 5x5 grid
    OutOfBounds,
    /// Destination already holds a unit of the acting side
    DestinationOccupied,

    // Placement rejections
    /// Side already placed its units
    AlreadyPlaced,

    // Session lifecycle
    /// No live session with the given id
    GameNotFound,
    /// Connection is not a participant of the session
    NotAParticipant,
    /// Session already has two players
    SessionFull,
    /// Session is finished or abandoned
    SessionTerminated,
    /// Intent is not valid in the current phase
    PhaseMismatch,

    // Request validation
    /// General validation error
    ValidationError,
    /// Malformed or out-of-sequence client frame
    BadRequest,
    /// Unexpected server-side failure
    Internal,
}

impl ErrorCode {
    /// Returns the canonical string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnitNotFound => "UNIT_NOT_FOUND",
            ErrorCode::NotYourUnit => "NOT_YOUR_UNIT",
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::IllegalDirection => "ILLEGAL_DIRECTION",
            ErrorCode::OutOfBounds => "OUT_OF_BOUNDS",
            ErrorCode::DestinationOccupied => "DESTINATION_OCCUPIED",
            ErrorCode::AlreadyPlaced => "ALREADY_PLACED",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::NotAParticipant => "NOT_A_PARTICIPANT",
            ErrorCode::SessionFull => "SESSION_FULL",
            ErrorCode::SessionTerminated => "SESSION_TERMINATED",
            ErrorCode::PhaseMismatch => "PHASE_MISMATCH",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    /// All codes, for exhaustiveness and uniqueness tests.
    pub fn all() -> &'static [ErrorCode] {
        &[
            ErrorCode::UnitNotFound,
            ErrorCode::NotYourUnit,
            ErrorCode::OutOfTurn,
            ErrorCode::IllegalDirection,
            ErrorCode::OutOfBounds,
            ErrorCode::DestinationOccupied,
            ErrorCode::AlreadyPlaced,
            ErrorCode::GameNotFound,
            ErrorCode::NotAParticipant,
            ErrorCode::SessionFull,
            ErrorCode::SessionTerminated,
            ErrorCode::PhaseMismatch,
            ErrorCode::ValidationError,
            ErrorCode::BadRequest,
            ErrorCode::Internal,
        ]
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::UnitNotFound(_) => ErrorCode::UnitNotFound,
            DomainError::GameNotFound(_) => ErrorCode::GameNotFound,
            DomainError::NotAParticipant => ErrorCode::NotAParticipant,
            DomainError::NotYourUnit => ErrorCode::NotYourUnit,
            DomainError::OutOfTurn => ErrorCode::OutOfTurn,
            DomainError::IllegalDirection => ErrorCode::IllegalDirection,
            DomainError::OutOfBounds => ErrorCode::OutOfBounds,
            DomainError::DestinationOccupied => ErrorCode::DestinationOccupied,
            DomainError::AlreadyPlaced => ErrorCode::AlreadyPlaced,
            DomainError::SessionFull => ErrorCode::SessionFull,
            DomainError::SessionTerminated => ErrorCode::SessionTerminated,
            DomainError::PhaseMismatch => ErrorCode::PhaseMismatch,
            DomainError::Validation(_) => ErrorCode::ValidationError,
        }
    }
}
