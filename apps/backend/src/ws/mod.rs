//! WebSocket transport: wire protocol, connection hub, and session actors.
//!
//! This layer is a thin I/O wrapper. It parses frames, forwards intents to
//! `GameFlowService`, and fans the results out; no game logic lives here.

pub mod hub;
pub mod protocol;
pub mod session;
