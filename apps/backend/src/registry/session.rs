use uuid::Uuid;

use crate::domain::state::{GameState, Phase};
use crate::domain::units::Side;

/// Session identifier. Assigned sequentially by the registry; uniqueness is
/// the only requirement.
pub type SessionId = i64;

/// One participant in a session, keyed by its opaque connection id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub conn: Uuid,
    pub letter: Side,
}

/// One in-progress or finished match between at most two participants.
///
/// `players[0]` is always A and `players[1]` always B while present;
/// letters are assigned by join order and never reassigned.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: SessionId,
    players: Vec<Player>,
    pub state: GameState,
}

impl GameSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            players: Vec::with_capacity(2),
            state: GameState::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Claims the next open seat for `conn`, or `None` when the session is
    /// not accepting joins. Filling the second seat advances the phase to
    /// `Placement`. Must be called under the session lock.
    pub fn try_claim_seat(&mut self, conn: Uuid) -> Option<(usize, Side)> {
        if self.state.phase != Phase::Waiting || self.players.len() >= 2 {
            return None;
        }
        let letter = if self.players.is_empty() {
            Side::A
        } else {
            Side::B
        };
        let index = self.players.len();
        self.players.push(Player { conn, letter });
        if self.players.len() == 2 {
            self.state.phase = Phase::Placement;
        }
        Some((index, letter))
    }

    pub fn has_player(&self, conn: Uuid) -> bool {
        self.players.iter().any(|p| p.conn == conn)
    }

    pub fn side_of(&self, conn: Uuid) -> Option<Side> {
        self.players
            .iter()
            .find(|p| p.conn == conn)
            .map(|p| p.letter)
    }

    /// Removes the participant; returns false when it was not present
    /// (a racing leave already took it).
    pub fn remove_player(&mut self, conn: Uuid) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.conn != conn);
        self.players.len() != before
    }

    /// Marks the session terminal after a mid-game disconnect. A session
    /// that already has a winner keeps it.
    pub fn abandon(&mut self) {
        if !self.state.phase.is_terminal() {
            self.state.phase = Phase::Abandoned;
        }
    }

    pub fn connections(&self) -> Vec<Uuid> {
        self.players.iter().map(|p| p.conn).collect()
    }
}
