//! Mock PIN second-factor authentication for pinauth.
//!
//! This crate provides:
//! - The flow session tracker over an in-memory session store
//! - Axum routes for the identity server callbacks and the PIN-entry page
//! - The JSON action responses the identity server expects

mod config;
mod error;
mod extractors;
mod handlers;
mod response;
mod sessions;
mod state;
mod templates;
mod tracker;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::FormOrJson;
pub use handlers::auth_routes;
pub use response::{ActionResponse, Operation, OperationKind, SuccessData};
pub use sessions::SessionStore;
pub use state::AuthState;
pub use tracker::FlowSessionTracker;
