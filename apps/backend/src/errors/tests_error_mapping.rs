use std::collections::HashSet;

use crate::errors::domain::DomainError;
use crate::errors::error_code::ErrorCode;

#[test]
fn every_domain_error_maps_to_its_code() {
    let cases = [
        (
            DomainError::UnitNotFound("A-P1".into()),
            ErrorCode::UnitNotFound,
        ),
        (DomainError::GameNotFound(7), ErrorCode::GameNotFound),
        (DomainError::NotAParticipant, ErrorCode::NotAParticipant),
        (DomainError::NotYourUnit, ErrorCode::NotYourUnit),
        (DomainError::OutOfTurn, ErrorCode::OutOfTurn),
        (DomainError::IllegalDirection, ErrorCode::IllegalDirection),
        (DomainError::OutOfBounds, ErrorCode::OutOfBounds),
        (
            DomainError::DestinationOccupied,
            ErrorCode::DestinationOccupied,
        ),
        (DomainError::AlreadyPlaced, ErrorCode::AlreadyPlaced),
        (DomainError::SessionFull, ErrorCode::SessionFull),
        (DomainError::SessionTerminated, ErrorCode::SessionTerminated),
        (DomainError::PhaseMismatch, ErrorCode::PhaseMismatch),
        (
            DomainError::validation("too many units"),
            ErrorCode::ValidationError,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(ErrorCode::from(&err), expected, "mapping for {err:?}");
    }
}

#[test]
fn error_code_strings_are_unique_and_screaming() {
    let mut seen = HashSet::new();
    for code in ErrorCode::all() {
        let s = code.as_str();
        assert!(seen.insert(s), "duplicate error code string: {s}");
        assert_eq!(
            s,
            s.to_uppercase(),
            "error code must be SCREAMING_SNAKE_CASE: {s}"
        );
    }
}

#[test]
fn error_code_serializes_as_its_canonical_string() {
    for code in ErrorCode::all() {
        let json = serde_json::to_string(code).expect("serialize error code");
        assert_eq!(json, format!("\"{}\"", code.as_str()));
    }
}
