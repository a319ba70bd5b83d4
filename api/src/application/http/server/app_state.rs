use std::sync::Arc;

use foodchain_core::{
    application::FoodchainService, infrastructure::session::InMemorySessionRepository,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<FoodchainService>,
    pub session_repository: Arc<InMemorySessionRepository>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: FoodchainService,
        session_repository: InMemorySessionRepository,
    ) -> Self {
        Self {
            args,
            service: Arc::new(service),
            session_repository: Arc::new(session_repository),
        }
    }
}
