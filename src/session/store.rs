//! In-memory session store.
//!
//! Process-lifetime only: no persistence, no TTL, no eviction. Eviction
//! would need its own design before any long-running production use.
//!
//! All mutation goes through [`SessionStore::update`], which runs the
//! caller's closure under the store lock. That serializes every
//! read-modify-write, so concurrent requests for the same key can never
//! lose a `turns` increment.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::session::Session;

/// Keyed store of [`Session`] records.
pub struct SessionStore {
    inner: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Get-or-create the session for `key` and apply `f` to it under the
    /// store lock. Returns whatever the closure returns — typically a
    /// snapshot of the fields the caller needs after the merge.
    pub async fn update<T>(&self, key: &str, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut sessions = self.inner.lock().await;
        let session = sessions.entry(key.to_string()).or_default();
        f(session)
    }

    /// Clone the current session for `key`, if any.
    pub async fn snapshot(&self, key: &str) -> Option<Session> {
        self.inner.lock().await.get(key).cloned()
    }

    /// Number of sessions tracked.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn creates_sessions_lazily() {
        let store = SessionStore::new();
        assert!(store.snapshot("s1").await.is_none());

        let turns = store
            .update("s1", |s| {
                s.turns += 1;
                s.turns
            })
            .await;
        assert_eq!(turns, 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn keys_are_isolated() {
        let store = SessionStore::new();
        store.update("a", |s| s.turns += 1).await;
        store.update("b", |s| s.scam_detected = true).await;

        assert_eq!(store.snapshot("a").await.unwrap().turns, 1);
        assert!(!store.snapshot("a").await.unwrap().scam_detected);
        assert!(store.snapshot("b").await.unwrap().scam_detected);
    }

    #[tokio::test]
    async fn concurrent_updates_never_lose_increments() {
        let store = Arc::new(SessionStore::new());
        let mut handles = Vec::new();
        for _ in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.update("shared", |s| s.turns += 1).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.snapshot("shared").await.unwrap().turns, 50);
    }
}
