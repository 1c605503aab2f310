use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::board::GRID_SIZE;

/// One of the two sides in a session.
///
/// Letters are assigned by join order (first joiner = A, second = B) and
/// never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Home rank: row 4 for A, row 0 for B.
    pub fn home_row(self) -> usize {
        match self {
            Side::A => GRID_SIZE - 1,
            Side::B => 0,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Side::A => 'A',
            Side::B => 'B',
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.letter())
    }
}

/// Movement class of a unit, derived from its label at placement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// One step along an axis.
    Pawn,
    /// Two steps along an axis.
    HeroOrthogonal,
    /// Two steps along a diagonal.
    HeroDiagonal,
}

impl UnitKind {
    /// Kind encoding used by clients: `P*` is a pawn, `H1*` an orthogonal
    /// hero, `H2*` a diagonal hero. Anything else has no movement table and
    /// can never move (composition is deliberately not enforced at
    /// placement).
    pub fn from_label(label: &str) -> Option<UnitKind> {
        let mut chars = label.chars();
        match chars.next() {
            Some('P') => Some(UnitKind::Pawn),
            Some('H') => match chars.next() {
                Some('1') => Some(UnitKind::HeroOrthogonal),
                Some('2') => Some(UnitKind::HeroDiagonal),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A placed piece. Built once at placement and carried by value afterwards;
/// ownership checks never re-parse wire strings.
///
/// The wire identifier is `"<side>-<label>"`, e.g. `"A-P1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub side: Side,
    pub label: String,
    pub kind: Option<UnitKind>,
}

impl Unit {
    pub fn new(side: Side, label: impl Into<String>) -> Self {
        let label = label.into();
        let kind = UnitKind::from_label(&label);
        Self { side, label, kind }
    }

    /// Wire identifier, e.g. `"A-P1"`.
    pub fn token(&self) -> String {
        format!("{}-{}", self.side, self.label)
    }

    pub fn matches_token(&self, token: &str) -> bool {
        let mut parts = token.splitn(2, '-');
        let (Some(side), Some(label)) = (parts.next(), parts.next()) else {
            return false;
        };
        side.len() == 1 && side.starts_with(self.side.letter()) && label == self.label
    }
}
