use serde::{Deserialize, Serialize};

use crate::domain::movement::Direction;
use crate::domain::snapshot::GridSnapshot;
use crate::domain::units::Side;
use crate::errors::ErrorCode;
use crate::registry::SessionId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    /// Ask the registry for a seat in an open or fresh session.
    JoinGame,
    /// Place up to five units on the caller's home rank, in order.
    PlaceUnits {
        game_id: SessionId,
        units: Vec<String>,
    },
    /// Move one unit. `unit` is the wire identifier, e.g. `"A-P1"`.
    Move {
        game_id: SessionId,
        unit: String,
        direction: Direction,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    /// Unicast ack to a joiner.
    GameJoined {
        game_id: SessionId,
        player_index: usize,
        letter: Side,
    },
    /// Broadcast when the second player joins.
    GameStart { current_turn: Side },
    /// Broadcast when both sides have placed.
    UnitsPlaced { grid: GridSnapshot },
    /// Broadcast after every legal move while play continues.
    GameUpdate {
        grid: GridSnapshot,
        current_turn: Side,
    },
    /// Unicast to the mover on an illegal move.
    MoveRejected { code: ErrorCode, message: String },
    /// Broadcast when a side wins.
    GameOver { winner: Side },
    /// Unicast when a seat cannot be assigned. Unreachable in practice:
    /// the registry creates sessions on demand.
    GameFull,
    /// Broadcast to the survivors of a disconnect.
    OpponentLeft,
    /// Unicast protocol-level failure (malformed frame, stale session id,
    /// placement rejection).
    Error { code: ErrorCode, message: String },
}
