//! Service layer: orchestration between the transport and the domain.

pub mod game_flow;
