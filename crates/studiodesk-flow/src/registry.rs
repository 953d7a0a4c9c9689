use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::error::FlowError;
use crate::gateway::Gateway;
use crate::materializer::Materializer;
use crate::session::{ChatSession, SessionSnapshot, TurnOutcome};

pub type SharedSession = Arc<Mutex<ChatSession>>;

/// Live chat sessions keyed by id
///
/// Each session sits behind its own mutex. A submission that finds the mutex held
/// is rejected with [`FlowError::Busy`] rather than queued.
pub struct SessionRegistry {
    gateway: Arc<Gateway>,
    materializer: Arc<Materializer>,
    sessions: RwLock<HashMap<String, SharedSession>>,
}

impl SessionRegistry {
    pub fn new(gateway: Arc<Gateway>, materializer: Arc<Materializer>) -> Self {
        Self {
            gateway,
            materializer,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }

    /// Open a session seeded with the welcome turn
    pub async fn create(&self, reporter: Option<String>) -> SessionSnapshot {
        let mut session = ChatSession::new(Arc::clone(&self.gateway), Arc::clone(&self.materializer));
        if let Some(reporter) = reporter {
            session = session.with_reporter(reporter);
        }
        let snapshot = session.snapshot();

        self.sessions
            .write()
            .await
            .insert(snapshot.id.clone(), Arc::new(Mutex::new(session)));

        tracing::info!(session_id = %snapshot.id, "Chat session opened");
        snapshot
    }

    pub async fn get(&self, id: &str) -> Option<SharedSession> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Snapshot of a session; `Busy` while a turn is running
    pub async fn snapshot(&self, id: &str) -> Result<SessionSnapshot, FlowError> {
        let session = self
            .get(id)
            .await
            .ok_or_else(|| FlowError::SessionNotFound(id.to_string()))?;
        let guard = session.try_lock().map_err(|_| FlowError::Busy)?;
        Ok(guard.snapshot())
    }

    /// Submit a message to a session
    ///
    /// The turn runs on its own task, so dropping the returned future does not
    /// abandon a half-finished turn.
    pub async fn submit(&self, id: &str, input: String) -> Result<TurnOutcome, FlowError> {
        let session = self
            .get(id)
            .await
            .ok_or_else(|| FlowError::SessionNotFound(id.to_string()))?;
        let mut guard = session.try_lock_owned().map_err(|_| FlowError::Busy)?;

        let handle = tokio::spawn(async move { guard.submit(&input).await });
        handle.await.map_err(|e| FlowError::Task(e.to_string()))?
    }

    /// Close a session and drop its transcript
    pub async fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            tracing::info!(session_id = %id, "Chat session closed");
        }
        removed
    }

    /// Drop sessions with no submission for at least `max_idle`
    ///
    /// Sessions with a turn in flight are kept. Returns how many were dropped.
    pub async fn expire_idle(&self, max_idle: Duration) -> usize {
        let max_idle = chrono::Duration::from_std(max_idle).unwrap_or(chrono::Duration::MAX);
        let now = Utc::now();

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(guard) => now - guard.last_active() < max_idle,
            Err(_) => true,
        });
        let expired = before - sessions.len();

        if expired > 0 {
            tracing::info!(expired, remaining = sessions.len(), "Expired idle chat sessions");
        }
        expired
    }

    /// Run [`SessionRegistry::expire_idle`] every `every` until the task is aborted
    pub fn spawn_idle_sweep(self: &Arc<Self>, max_idle: Duration, every: Duration) -> JoinHandle<()> {
        let registry = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                registry.expire_idle(max_idle).await;
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
