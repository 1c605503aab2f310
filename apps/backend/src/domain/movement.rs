use serde::{Deserialize, Serialize};

use crate::domain::units::UnitKind;

/// Direction token as sent by clients. F is toward row 0 and B toward row 4
/// for both sides; the board is not mirrored per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    F,
    B,
    L,
    R,
    FL,
    FR,
    BL,
    BR,
}

/// `(drow, dcol)` for a unit kind and direction, or `None` when the
/// direction is not in that kind's movement table (diagonals for a pawn,
/// axes for a diagonal hero).
pub fn step(kind: UnitKind, direction: Direction) -> Option<(i8, i8)> {
    match kind {
        UnitKind::Pawn => match direction {
            Direction::F => Some((-1, 0)),
            Direction::B => Some((1, 0)),
            Direction::L => Some((0, -1)),
            Direction::R => Some((0, 1)),
            _ => None,
        },
        UnitKind::HeroOrthogonal => match direction {
            Direction::F => Some((-2, 0)),
            Direction::B => Some((2, 0)),
            Direction::L => Some((0, -2)),
            Direction::R => Some((0, 2)),
            _ => None,
        },
        UnitKind::HeroDiagonal => match direction {
            Direction::FL => Some((-2, -2)),
            Direction::FR => Some((-2, 2)),
            Direction::BL => Some((2, -2)),
            Direction::BR => Some((2, 2)),
            _ => None,
        },
    }
}
