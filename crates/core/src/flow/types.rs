use serde::{Deserialize, Serialize};
use url::Url;

/// Caller-supplied identifier correlating every request of one authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowId(String);

impl FlowId {
    /// Wraps a non-empty identifier. Returns `None` for an empty string.
    pub fn parse(id: &str) -> Option<Self> {
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FlowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `{uri, value}` attribute describing a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub uri: String,
    pub value: String,
}

impl Claim {
    pub fn new(uri: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            value: value.into(),
        }
    }
}

/// A user known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    /// Claims in the order they are reported to the identity server.
    pub claims: Vec<Claim>,
}

impl UserRecord {
    /// Value of the first claim whose URI ends with `/<name>`.
    pub fn claim(&self, name: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|c| {
                c.uri
                    .rsplit_once('/')
                    .is_some_and(|(_, local)| local == name)
            })
            .map(|c| c.value.as_str())
    }
}

/// Lifecycle state of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowStatus {
    /// No record exists yet.
    Pending,
    Success,
    Failed,
}

impl std::fmt::Display for FlowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Success => write!(f, "SUCCESS"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// Recorded outcome of a PIN validation.
///
/// The user is carried by the `Success` variant only, so a failed session can
/// never hold a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowSession {
    Success { user: UserRecord },
    Failed,
}

impl FlowSession {
    pub fn status(&self) -> FlowStatus {
        match self {
            Self::Success { .. } => FlowStatus::Success,
            Self::Failed => FlowStatus::Failed,
        }
    }

    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            Self::Success { user } => Some(user),
            Self::Failed => None,
        }
    }
}

/// Status of a possibly absent session.
pub fn status_of(session: Option<&FlowSession>) -> FlowStatus {
    session.map_or(FlowStatus::Pending, FlowSession::status)
}

/// Why a completed flow was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    UserNotFound,
}

impl FailureReason {
    /// Reason code reported to the identity server.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound => "userNotFound",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::UserNotFound => "Unable to find user for given credentials.",
        }
    }
}

/// Answer to an authenticate or status-check call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Success { user: UserRecord },
    /// The user must be sent to the PIN-entry page first.
    Incomplete { redirect: Url },
    Failed { reason: FailureReason },
}

impl Decision {
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Success { .. } => "SUCCESS",
            Self::Incomplete { .. } => "INCOMPLETE",
            Self::Failed { .. } => "FAILED",
        }
    }
}
