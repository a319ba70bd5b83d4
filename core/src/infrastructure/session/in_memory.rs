use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{entities::SplitSession, ports::SessionRepository},
};

/// Session store backed by process memory. Sessions live for the duration
/// of one bill split and the snapshot export is the only persisted
/// artifact, so nothing here ever touches a database.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, SplitSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: SplitSession) -> Result<SplitSession, CoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());

        Ok(session)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<SplitSession>, CoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&session_id).cloned())
    }

    async fn update(&self, session: SplitSession) -> Result<SplitSession, CoreError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id) {
            return Err(CoreError::ReferenceNotFound(format!(
                "session {}",
                session.id
            )));
        }

        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn delete(&self, session_id: Uuid) -> Result<(), CoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&session_id);

        Ok(())
    }
}
