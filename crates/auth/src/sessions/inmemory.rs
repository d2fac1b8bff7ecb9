//! In-memory flow session storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pinauth_core::flow::{FlowId, FlowSession, FlowSessionRepository, Result};

/// In-memory flow session store.
///
/// Stores flow outcomes in a HashMap wrapped in `Arc<RwLock<_>>`. Clones share
/// the same map. Data is not persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct SessionStore {
    flows: Arc<RwLock<HashMap<String, FlowSession>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates a new empty in-memory session store.
    pub fn new() -> Self {
        Self {
            flows: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl FlowSessionRepository for SessionStore {
    async fn get_flow(&self, flow_id: &FlowId) -> Result<Option<FlowSession>> {
        let flows = self.flows.read().await;
        Ok(flows.get(flow_id.as_str()).cloned())
    }

    async fn put_flow(&self, flow_id: &FlowId, session: &FlowSession) -> Result<()> {
        let mut flows = self.flows.write().await;
        flows.insert(flow_id.as_str().to_string(), session.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinauth_core::flow::UserDirectory;

    fn flow(id: &str) -> FlowId {
        FlowId::parse(id).unwrap()
    }

    fn success() -> FlowSession {
        FlowSession::Success {
            user: UserDirectory::default().lookup("1234").cloned().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_flow_put_and_get() {
        let store = SessionStore::new();

        store.put_flow(&flow("flow-1"), &success()).await.unwrap();

        let retrieved = store.get_flow(&flow("flow-1")).await.unwrap();
        assert_eq!(retrieved, Some(success()));
    }

    #[tokio::test]
    async fn test_flow_get_nonexistent() {
        let store = SessionStore::new();

        let result = store.get_flow(&flow("nonexistent")).await.unwrap();
        assert!(result.is_none());
        assert!(store.flows.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_flow_overwrite() {
        let store = SessionStore::new();

        store.put_flow(&flow("same"), &success()).await.unwrap();
        store.put_flow(&flow("same"), &FlowSession::Failed).await.unwrap();

        let retrieved = store.get_flow(&flow("same")).await.unwrap();
        assert_eq!(retrieved, Some(FlowSession::Failed));
        assert_eq!(store.flows.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_flows_are_keyed_independently() {
        let store = SessionStore::new();

        store.put_flow(&flow("a"), &success()).await.unwrap();
        store.put_flow(&flow("b"), &FlowSession::Failed).await.unwrap();

        assert_eq!(store.get_flow(&flow("a")).await.unwrap(), Some(success()));
        assert_eq!(
            store.get_flow(&flow("b")).await.unwrap(),
            Some(FlowSession::Failed)
        );
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let store = SessionStore::new();
        let clone = store.clone();

        store.put_flow(&flow("flow-1"), &success()).await.unwrap();

        let retrieved = clone.get_flow(&flow("flow-1")).await.unwrap();
        assert!(retrieved.is_some());
    }

    #[tokio::test]
    async fn test_concurrent_writers_leave_one_outcome() {
        let store = SessionStore::new();

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let session = if i % 2 == 0 {
                    success()
                } else {
                    FlowSession::Failed
                };
                store.put_flow(&flow("race"), &session).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.flows.read().await.len(), 1);
        assert!(store.get_flow(&flow("race")).await.unwrap().is_some());
    }
}
