use std::sync::Arc;

use studiodesk_flow::{Gateway, Materializer, SessionRegistry};
use studiodesk_persist::TicketStore;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// All resources are wrapped in Arc for sharing across async tasks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn TicketStore>,
    pub gateway: Arc<Gateway>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn TicketStore>, gateway: Gateway) -> Self {
        let gateway = Arc::new(gateway);
        let materializer = Arc::new(Materializer::new(Arc::clone(&store)));
        let sessions = Arc::new(SessionRegistry::new(Arc::clone(&gateway), materializer));

        Self {
            config: Arc::new(config),
            store,
            gateway,
            sessions,
        }
    }
}
