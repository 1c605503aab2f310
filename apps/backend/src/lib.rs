#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod error;
pub mod errors;
pub mod health;
pub mod registry;
pub mod routes;
pub mod services;
pub mod state;
pub mod ws;

// Re-exports for public API
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use registry::SessionRegistry;
pub use services::game_flow::GameFlowService;
pub use state::app_state::AppState;
