use crate::domain::state::{GameState, Phase};
use crate::domain::units::Side;

/// Lifecycle facts captured around a mutation, cheap enough to snapshot on
/// every intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleView {
    pub phase: Phase,
    pub turn: Option<Side>,
}

impl LifecycleView {
    pub fn of(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            turn: (state.phase == Phase::Playing).then_some(state.turn),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: both seats filled, placement may begin.
    GameStarted,
    /// Edge-triggered: both sides placed, the first turn is live.
    PlacementComplete,
    /// Edge-triggered: the turn became a specific side.
    TurnBecame { side: Side },
    /// Edge-triggered: a side won.
    GameEnded { winner: Side },
    /// Edge-triggered: a disconnect made the session terminal.
    GameAbandoned,
}

/// Derive broadcast-worthy transitions from before/after lifecycle state,
/// so that emit decisions live in one place instead of inside the mutators.
pub fn derive_transitions(before: LifecycleView, after: LifecycleView) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if before.phase == Phase::Waiting && after.phase == Phase::Placement {
        transitions.push(GameTransition::GameStarted);
    }

    if before.phase == Phase::Placement && after.phase == Phase::Playing {
        transitions.push(GameTransition::PlacementComplete);
    }

    if let Some(side) = after.turn {
        if before.turn != Some(side) {
            transitions.push(GameTransition::TurnBecame { side });
        }
    }

    if let Phase::GameOver { winner } = after.phase {
        if !matches!(before.phase, Phase::GameOver { .. }) {
            transitions.push(GameTransition::GameEnded { winner });
        }
    }

    if before.phase != Phase::Abandoned && after.phase == Phase::Abandoned {
        transitions.push(GameTransition::GameAbandoned);
    }

    transitions
}
