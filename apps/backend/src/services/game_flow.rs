//! Orchestrates validated intents against sessions and derives the outbound
//! events the transport should deliver.
//!
//! Methods run the whole validate-and-mutate path inside the session lock
//! (via `SessionRegistry::with_session`), capture before/after lifecycle
//! views, and translate the derived transitions into broadcast-ready data.
//! The transport layer stays free of game logic: it forwards intents here
//! and fans out whatever comes back.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::game_transition::{derive_transitions, GameTransition, LifecycleView};
use crate::domain::movement::Direction;
use crate::domain::moves::apply_move;
use crate::domain::placement::place_units;
use crate::domain::snapshot::GridSnapshot;
use crate::domain::units::Side;
use crate::errors::domain::DomainError;
use crate::registry::{SessionId, SessionRegistry};

/// Outcome of a join intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    pub game_id: SessionId,
    pub player_index: usize,
    pub letter: Side,
    /// Present when this join filled the session: broadcast `game_start`
    /// with the side to act first.
    pub start: Option<Side>,
}

/// Outcome of a placement intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOutcome {
    pub game_id: SessionId,
    /// Present when both sides have now placed: broadcast `units_placed`.
    pub grid: Option<GridSnapshot>,
}

/// Outcome of a successful move intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveApplied {
    pub game_id: SessionId,
    pub grid: GridSnapshot,
    /// Side to act next, when play continues.
    pub current_turn: Option<Side>,
    /// Set when this move ended the game.
    pub winner: Option<Side>,
}

/// Outcome of a disconnect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOutcome {
    pub game_id: SessionId,
    /// Connections to notify with `opponent_left`.
    pub remaining: Vec<Uuid>,
    pub abandoned: bool,
}

pub struct GameFlowService {
    registry: Arc<SessionRegistry>,
}

impl GameFlowService {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Assigns `conn` to an open session or a fresh one. Infallible: the
    /// registry creates sessions on demand, so capacity is unbounded.
    pub fn join(&self, conn: Uuid) -> JoinOutcome {
        let joined = self.registry.join(conn);
        JoinOutcome {
            game_id: joined.game_id,
            player_index: joined.player_index,
            letter: joined.letter,
            // The first turn is always A.
            start: joined.started.then_some(Side::A),
        }
    }

    /// Places the caller's units on its home rank.
    pub fn place_units(
        &self,
        conn: Uuid,
        game_id: SessionId,
        labels: &[String],
    ) -> Result<PlaceOutcome, DomainError> {
        self.registry.with_session(game_id, |game| {
            let side = game.side_of(conn).ok_or(DomainError::NotAParticipant)?;
            let before = LifecycleView::of(&game.state);
            place_units(&mut game.state, side, labels)?;
            let after = LifecycleView::of(&game.state);
            info!(game_id, %side, units = labels.len(), "units placed");

            let complete = derive_transitions(before, after)
                .contains(&GameTransition::PlacementComplete);
            Ok(PlaceOutcome {
                game_id,
                grid: complete.then(|| GridSnapshot::from_board(&game.state.board)),
            })
        })
    }

    /// Applies one move. Ownership, turn order, movement table, bounds, and
    /// the capture rule are all enforced inside the session lock.
    pub fn make_move(
        &self,
        conn: Uuid,
        game_id: SessionId,
        unit_ref: &str,
        direction: Direction,
    ) -> Result<MoveApplied, DomainError> {
        self.registry.with_session(game_id, |game| {
            let side = game.side_of(conn).ok_or(DomainError::NotAParticipant)?;
            let before = LifecycleView::of(&game.state);
            let outcome = apply_move(&mut game.state, side, unit_ref, direction)?;
            let after = LifecycleView::of(&game.state);
            debug!(
                game_id,
                %side,
                unit = unit_ref,
                ?direction,
                captured = outcome.captured.is_some(),
                "move applied"
            );

            let mut current_turn = None;
            let mut winner = None;
            for transition in derive_transitions(before, after) {
                match transition {
                    GameTransition::TurnBecame { side } => current_turn = Some(side),
                    GameTransition::GameEnded { winner: w } => {
                        info!(game_id, winner = %w, "game over");
                        winner = Some(w);
                    }
                    _ => {}
                }
            }
            Ok(MoveApplied {
                game_id,
                grid: GridSnapshot::from_board(&game.state.board),
                current_turn,
                winner,
            })
        })
    }

    /// Removes a disconnected participant; reports who to notify.
    pub fn leave(&self, conn: Uuid) -> Option<LeaveOutcome> {
        let left = self.registry.leave(conn)?;
        Some(LeaveOutcome {
            game_id: left.game_id,
            remaining: left.remaining,
            abandoned: left.abandoned,
        })
    }
}
