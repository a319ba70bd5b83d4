use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, session::entities::SplitSession};

/// Repository trait for split sessions. Sessions are runtime state owned by
/// a single actor; implementations only need to give that actor its session
/// back.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create(
        &self,
        session: SplitSession,
    ) -> impl Future<Output = Result<SplitSession, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<SplitSession>, CoreError>> + Send;

    fn update(
        &self,
        session: SplitSession,
    ) -> impl Future<Output = Result<SplitSession, CoreError>> + Send;

    fn delete(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
