use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;

/// In-memory, process-lifetime store of session state keyed by session id.
///
/// Locks are held only for the duration of a closure; callers must never await
/// inside `update`. Nothing is persisted.
pub struct SessionStore<T> {
    inner: Arc<RwLock<HashMap<Uuid, T>>>,
    kind: &'static str,
}

impl<T> Clone for SessionStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            kind: self.kind,
        }
    }
}

impl<T: Clone> SessionStore<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            kind,
        }
    }

    pub async fn insert(&self, id: Uuid, session: T) {
        self.inner.write().await.insert(id, session);
    }

    /// Returns a snapshot of the session.
    pub async fn get(&self, id: Uuid) -> Result<T, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    /// Applies `f` to the session under the write lock.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut T) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| self.not_found(id))?;
        f(session)
    }

    fn not_found(&self, id: Uuid) -> AppError {
        AppError::NotFound(format!("{} session {id} not found", self.kind))
    }
}
