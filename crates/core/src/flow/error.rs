use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("flow ID is required")]
    MissingFlowId,

    #[error("missing flow ID, PIN, or redirect URL")]
    MissingParameters,

    #[error("invalid or expired flow ID")]
    InvalidFlowId,

    #[error("tenant name is required to start a flow")]
    MissingTenant,

    #[error("invalid tenant name: {0}")]
    InvalidTenant(String),

    #[error("invalid redirect URL: {0}")]
    InvalidRedirectUrl(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl FlowError {
    /// Reason code reported to the identity server, for errors that surface as
    /// a `FAILED` action response.
    pub fn failure_code(&self) -> Option<&'static str> {
        match self {
            Self::MissingFlowId => Some("missingFlowId"),
            Self::InvalidFlowId => Some("invalidFlowId"),
            Self::MissingTenant => Some("missingTenant"),
            Self::InvalidTenant(_) => Some("invalidTenant"),
            Self::MissingParameters | Self::InvalidRedirectUrl(_) | Self::Storage(_) => None,
        }
    }

    pub fn failure_description(&self) -> &'static str {
        match self {
            Self::MissingFlowId => "Flow ID is required.",
            Self::InvalidFlowId => "Invalid or expired Flow ID.",
            Self::MissingTenant => "Tenant name is required.",
            Self::InvalidTenant(_) => "Invalid tenant name.",
            Self::MissingParameters => "Missing Flow ID, PIN, or Redirect URL.",
            Self::InvalidRedirectUrl(_) => "Invalid Redirect URL.",
            Self::Storage(_) => "Internal server error",
        }
    }
}
