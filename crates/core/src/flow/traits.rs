use async_trait::async_trait;

use super::{FlowError, FlowId, FlowSession};

/// Result type for flow operations.
pub type Result<T> = std::result::Result<T, FlowError>;

/// Flow session storage abstraction.
#[async_trait]
pub trait FlowSessionRepository: Send + Sync {
    /// Retrieve the recorded outcome for a flow, if any.
    async fn get_flow(&self, flow_id: &FlowId) -> Result<Option<FlowSession>>;

    /// Record an outcome, replacing any previous one for the same flow.
    async fn put_flow(&self, flow_id: &FlowId, session: &FlowSession) -> Result<()>;
}
