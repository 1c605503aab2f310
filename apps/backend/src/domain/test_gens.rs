//! Proptest strategies for domain types.

use proptest::prelude::*;

use crate::domain::board::{Coord, GRID_SIZE};
use crate::domain::movement::Direction;
use crate::domain::units::{Side, UnitKind};

pub fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::A), Just(Side::B)]
}

pub fn unit_kind() -> impl Strategy<Value = UnitKind> {
    prop_oneof![
        Just(UnitKind::Pawn),
        Just(UnitKind::HeroOrthogonal),
        Just(UnitKind::HeroDiagonal),
    ]
}

pub fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::F),
        Just(Direction::B),
        Just(Direction::L),
        Just(Direction::R),
        Just(Direction::FL),
        Just(Direction::FR),
        Just(Direction::BL),
        Just(Direction::BR),
    ]
}

pub fn coord() -> impl Strategy<Value = Coord> {
    (0..GRID_SIZE, 0..GRID_SIZE)
        .prop_map(|(row, col)| Coord::new(row, col).expect("generated coordinate on the board"))
}
