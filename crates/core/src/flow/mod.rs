mod directory;
mod error;
mod functions;
mod http_mapping;
mod redirect;
mod traits;
mod types;

pub use directory::UserDirectory;
pub use error::FlowError;
pub use functions::{
    check_pin_submission, decide_authenticate, decide_initiate, decide_status,
    record_pin_outcome, require_flow_id, require_tenant, PinSubmission,
};
pub use http_mapping::flow_error_to_status_code;
pub use redirect::{append_session_data_key, PinEntryLinks, SESSION_DATA_KEY};
pub use traits::{FlowSessionRepository, Result};
pub use types::{
    status_of, Claim, Decision, FailureReason, FlowId, FlowSession, FlowStatus, UserRecord,
};
