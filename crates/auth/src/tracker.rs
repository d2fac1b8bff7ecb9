//! Flow session tracker.
//!
//! Glues the pure decisions in `pinauth_core::flow` to a session repository and
//! the user directory. Every operation reads or writes the repository at most
//! once, so concurrent requests on the same flow resolve as last-write-wins.

use std::sync::Arc;

use url::Url;

use pinauth_core::flow::{
    check_pin_submission, decide_authenticate, decide_initiate, decide_status, record_pin_outcome,
    require_flow_id, require_tenant, status_of, Decision, FlowError, FlowId, FlowSessionRepository,
    PinEntryLinks, Result, UserDirectory,
};

/// Tracks the outcome of every PIN flow.
#[derive(Clone)]
pub struct FlowSessionTracker {
    sessions: Arc<dyn FlowSessionRepository>,
    directory: Arc<UserDirectory>,
    links: PinEntryLinks,
}

impl FlowSessionTracker {
    pub fn new(
        sessions: Arc<dyn FlowSessionRepository>,
        directory: Arc<UserDirectory>,
        links: PinEntryLinks,
    ) -> Self {
        Self {
            sessions,
            directory,
            links,
        }
    }

    /// Starts a flow: reports an earlier success, or points the user at the
    /// PIN-entry page. Never writes.
    pub async fn initiate_authentication(
        &self,
        flow_id: &str,
        tenant: Option<&str>,
    ) -> Result<Decision> {
        let flow_id = require_flow_id(flow_id)?;
        let tenant = require_tenant(tenant)?;

        let session = self.sessions.get_flow(&flow_id).await?;
        let decision = decide_initiate(
            session.as_ref(),
            self.links.pin_entry_url(&flow_id, tenant),
        );

        tracing::debug!(
            flow_id = %flow_id,
            tenant,
            outcome = decision.outcome(),
            "Initiated authentication"
        );
        Ok(decision)
    }

    /// Validates a PIN and records the outcome for the flow.
    ///
    /// Returns the caller's redirect URL with `sessionDataKey` appended. Nothing
    /// is written when a parameter is missing or the redirect URL is invalid.
    pub async fn validate_pin(&self, flow_id: &str, pin: &str, redirect_url: &str) -> Result<Url> {
        let submission = check_pin_submission(flow_id, pin, redirect_url)?;

        let session = record_pin_outcome(self.directory.lookup(&submission.pin));
        self.sessions
            .put_flow(&submission.flow_id, &session)
            .await?;

        tracing::info!(
            flow_id = %submission.flow_id,
            status = %session.status(),
            "Recorded PIN outcome"
        );
        Ok(submission.redirect_target)
    }

    /// Reports the recorded outcome of a flow.
    pub async fn check_authentication_status(&self, flow_id: &str) -> Result<Decision> {
        let flow_id = FlowId::parse(flow_id).ok_or(FlowError::InvalidFlowId)?;

        let session = self.sessions.get_flow(&flow_id).await?;
        let decision = decide_status(session.as_ref());

        tracing::debug!(
            flow_id = %flow_id,
            status = %status_of(session.as_ref()),
            "Checked authentication status"
        );
        decision
    }

    /// Combined lookup-or-redirect used by the identity server's single
    /// authenticate callback.
    pub async fn authenticate(&self, flow_id: &str, tenant: Option<&str>) -> Result<Decision> {
        let flow_id = require_flow_id(flow_id)?;

        let session = self.sessions.get_flow(&flow_id).await?;
        let pin_entry = match require_tenant(tenant) {
            Ok(tenant) => Some(self.links.pin_entry_url(&flow_id, tenant)),
            Err(error @ FlowError::InvalidTenant(_)) if session.is_none() => return Err(error),
            Err(_) => None,
        };
        let decision = decide_authenticate(session.as_ref(), pin_entry);

        match &decision {
            Ok(decision) => tracing::debug!(
                flow_id = %flow_id,
                status = %status_of(session.as_ref()),
                outcome = decision.outcome(),
                "Authenticate callback"
            ),
            Err(error) => tracing::debug!(flow_id = %flow_id, %error, "Authenticate callback rejected"),
        }
        decision
    }
}
