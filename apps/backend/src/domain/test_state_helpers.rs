use crate::domain::board::Coord;
use crate::domain::state::{GameState, Phase};
use crate::domain::units::{Side, Unit, UnitKind};

pub struct MakeStateArgs {
    pub phase: Phase,
    pub turn: Side,
    pub placed: [bool; 2],
}

impl Default for MakeStateArgs {
    fn default() -> Self {
        Self {
            phase: Phase::Playing,
            turn: Side::A,
            placed: [true, true],
        }
    }
}

/// Builds a game state with the given units at `(row, col, side, label)`.
pub fn make_state(units: &[(usize, usize, Side, &str)], args: MakeStateArgs) -> GameState {
    let mut state = GameState::new();
    state.phase = args.phase;
    state.turn = args.turn;
    if args.placed[0] {
        state.mark_placed(Side::A);
    }
    if args.placed[1] {
        state.mark_placed(Side::B);
    }
    for &(row, col, side, label) in units {
        let at = Coord::new(row, col).expect("test coordinate on the board");
        state.board.set(at, Unit::new(side, label));
    }
    state
}

/// A label whose parsed kind is the given one.
pub fn label_for(kind: UnitKind) -> &'static str {
    match kind {
        UnitKind::Pawn => "P1",
        UnitKind::HeroOrthogonal => "H1",
        UnitKind::HeroDiagonal => "H2",
    }
}
