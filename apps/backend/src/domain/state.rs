use crate::domain::board::Board;
use crate::domain::units::Side;

/// Overall session progression phases. All transitions are one-directional;
/// a finished session is terminal and is replaced by a fresh join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Session created, waiting for the second player.
    Waiting,
    /// Both players joined; each side places its units on its home rank.
    Placement,
    /// Alternating moves.
    Playing,
    /// A side ran out of units.
    GameOver { winner: Side },
    /// A participant disconnected while the session still had a game going.
    Abandoned,
}

impl Phase {
    /// Terminal phases accept no further intents.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver { .. } | Phase::Abandoned)
    }
}

/// Per-session game state, sufficient for pure domain operations.
///
/// Invariants:
/// - `turn` only advances after a successful move during `Playing`.
/// - `placed` flags only ever go false -> true, once per side, during
///   `Placement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    pub board: Board,
    /// Side currently permitted to move. Meaningful during `Playing`.
    pub turn: Side,
    placed: [bool; 2],
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Waiting,
            board: Board::new(),
            turn: Side::A,
            placed: [false, false],
        }
    }

    pub fn has_placed(&self, side: Side) -> bool {
        self.placed[side_index(side)]
    }

    pub fn placed_count(&self) -> usize {
        self.placed.iter().filter(|&&p| p).count()
    }

    pub(crate) fn mark_placed(&mut self, side: Side) {
        self.placed[side_index(side)] = true;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::A => 0,
        Side::B => 1,
    }
}
