//! Application state for auth.

use std::sync::Arc;

use pinauth_core::flow::{FlowSessionRepository, UserDirectory};

use crate::config::AuthConfig;
use crate::sessions::SessionStore;
use crate::tracker::FlowSessionTracker;

/// Shared state for auth handlers.
#[derive(Clone)]
pub struct AuthState {
    pub tracker: FlowSessionTracker,
    pub config: AuthConfig,
}

impl AuthState {
    /// Creates a new AuthState over the given session repository and directory.
    pub fn new(
        sessions: Arc<dyn FlowSessionRepository>,
        directory: UserDirectory,
        config: AuthConfig,
    ) -> Self {
        let tracker = FlowSessionTracker::new(sessions, Arc::new(directory), config.links());
        Self { tracker, config }
    }

    /// Creates an AuthState backed by a fresh in-memory store and the fixed
    /// mock directory.
    pub fn in_memory(config: AuthConfig) -> Self {
        Self::new(
            Arc::new(SessionStore::new()),
            UserDirectory::default(),
            config,
        )
    }
}
