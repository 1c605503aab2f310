//! Domain layer: pure game logic types and helpers.
//!
//! Nothing in this module performs I/O, locking, or transport work; the
//! registry and game flow service own those concerns.

pub mod board;
pub mod game_transition;
pub mod movement;
pub mod moves;
pub mod placement;
pub mod snapshot;
pub mod state;
pub mod units;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_placement;
#[cfg(test)]
mod tests_props_movement;

// Re-exports for ergonomics
pub use board::{Board, Coord, GRID_SIZE};
pub use game_transition::{derive_transitions, GameTransition, LifecycleView};
pub use movement::Direction;
pub use moves::{apply_move, MoveOutcome};
pub use placement::place_units;
pub use snapshot::GridSnapshot;
pub use state::{GameState, Phase};
pub use units::{Side, Unit, UnitKind};
