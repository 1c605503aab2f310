use std::sync::Arc;

use crate::registry::SessionRegistry;
use crate::services::game_flow::GameFlowService;
use crate::ws::hub::WsHub;

/// Application state containing shared resources. Cloned per worker by
/// actix; all fields are shared handles.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<SessionRegistry>,
    flow: Arc<GameFlowService>,
    hub: Arc<WsHub>,
}

impl AppState {
    pub fn new() -> Self {
        let registry = Arc::new(SessionRegistry::new());
        let flow = Arc::new(GameFlowService::new(Arc::clone(&registry)));
        let hub = Arc::new(WsHub::new());
        Self {
            registry,
            flow,
            hub,
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn flow(&self) -> &GameFlowService {
        &self.flow
    }

    pub fn hub(&self) -> &WsHub {
        &self.hub
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
