//! Session registry: matchmaking, lookup, and cleanup.
//!
//! The registry owns every live session behind a concurrent map of
//! per-session mutexes. Distinct sessions proceed fully in parallel; within
//! one session every intent (seat claim, placement, move, disconnect) runs
//! inside the session lock, so at most one mutation is in flight per session
//! at a time.

mod session;

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::units::Side;
use crate::errors::domain::DomainError;

pub use session::{GameSession, Player, SessionId};

/// Result of a successful join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joined {
    pub game_id: SessionId,
    pub player_index: usize,
    pub letter: Side,
    /// True when this join filled the session and placement may begin.
    pub started: bool,
}

/// Result of removing a participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Left {
    pub game_id: SessionId,
    /// Connections still attached to the session after the removal.
    pub remaining: Vec<Uuid>,
    /// True when the session still had a game going and became terminal.
    pub abandoned: bool,
}

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Arc<Mutex<GameSession>>>,
    next_id: AtomicI64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            next_id: AtomicI64::new(0),
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Matches `conn` to an open session, creating a fresh one when no
    /// session has a free seat. The seat claim happens under the session
    /// lock, so two concurrent joins never take the same slot.
    pub fn join(&self, conn: Uuid) -> Joined {
        for entry in self.sessions.iter() {
            let mut game = entry.value().lock();
            if let Some((player_index, letter)) = game.try_claim_seat(conn) {
                let started = game.players().len() == 2;
                info!(game_id = game.id, %conn, %letter, "player joined");
                return Joined {
                    game_id: game.id,
                    player_index,
                    letter,
                    started,
                };
            }
        }

        let game_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut game = GameSession::new(game_id);
        // A fresh session always has seat A open.
        let (player_index, letter) = game
            .try_claim_seat(conn)
            .unwrap_or((0, Side::A));
        self.sessions.insert(game_id, Arc::new(Mutex::new(game)));
        info!(game_id, %conn, %letter, "session created");
        Joined {
            game_id,
            player_index,
            letter,
            started: false,
        }
    }

    /// Removes `conn` from the session containing it (at most one, by
    /// design). An emptied session is deleted from the registry; a session
    /// left short a player becomes terminal and its survivors are reported
    /// for an `opponent_left` broadcast.
    pub fn leave(&self, conn: Uuid) -> Option<Left> {
        let (game_id, slot) = self.sessions.iter().find_map(|entry| {
            entry
                .value()
                .lock()
                .has_player(conn)
                .then(|| (*entry.key(), Arc::clone(entry.value())))
        })?;

        let (remaining, abandoned) = {
            let mut game = slot.lock();
            if !game.remove_player(conn) {
                return None;
            }
            let remaining = game.connections();
            let abandoned = if remaining.is_empty() {
                false
            } else {
                game.abandon();
                true
            };
            (remaining, abandoned)
        };

        if remaining.is_empty() {
            self.sessions.remove(&game_id);
            debug!(game_id, "empty session deleted");
        }
        info!(game_id, %conn, abandoned, "player left");
        Some(Left {
            game_id,
            remaining,
            abandoned,
        })
    }

    /// Looks up a session and runs `f` under its lock. The session lock is
    /// the per-session critical section: all validation (including the turn
    /// check) happens inside it.
    pub fn with_session<R>(
        &self,
        game_id: SessionId,
        f: impl FnOnce(&mut GameSession) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        let slot = self
            .sessions
            .get(&game_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(DomainError::GameNotFound(game_id))?;
        let mut game = slot.lock();
        f(&mut game)
    }
}
