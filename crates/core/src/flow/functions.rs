use url::Url;

use super::redirect::append_session_data_key;
use super::traits::Result;
use super::{Decision, FailureReason, FlowError, FlowId, FlowSession, UserRecord};

/// Requires a non-empty flow identifier.
pub fn require_flow_id(flow_id: &str) -> Result<FlowId> {
    FlowId::parse(flow_id).ok_or(FlowError::MissingFlowId)
}

/// Requires a non-empty tenant name that can stand as a single URL path segment.
///
/// `.` and `..` are rejected since URL normalization would drop them from the
/// `commonauth` path.
pub fn require_tenant(tenant: Option<&str>) -> Result<&str> {
    match tenant {
        Some("") | None => Err(FlowError::MissingTenant),
        Some(name @ ("." | "..")) => Err(FlowError::InvalidTenant(name.to_string())),
        Some(name) => Ok(name),
    }
}

/// A checked PIN form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinSubmission {
    pub flow_id: FlowId,
    pub pin: String,
    /// Caller's redirect URL with `sessionDataKey` already appended.
    pub redirect_target: Url,
}

/// Checks a PIN submission before anything is written.
///
/// # Examples
///
/// ```
/// use pinauth_core::flow::{check_pin_submission, FlowError};
///
/// let ok = check_pin_submission("abc", "1234", "https://localhost:9443/commonauth").unwrap();
/// assert_eq!(
///     ok.redirect_target.as_str(),
///     "https://localhost:9443/commonauth?sessionDataKey=abc"
/// );
///
/// assert_eq!(
///     check_pin_submission("abc", "", "https://localhost:9443/commonauth"),
///     Err(FlowError::MissingParameters)
/// );
/// ```
pub fn check_pin_submission(flow_id: &str, pin: &str, redirect_url: &str) -> Result<PinSubmission> {
    if flow_id.is_empty() || pin.is_empty() || redirect_url.is_empty() {
        return Err(FlowError::MissingParameters);
    }

    let flow_id = FlowId::parse(flow_id).ok_or(FlowError::MissingParameters)?;
    let redirect_target = append_session_data_key(redirect_url, &flow_id)?;

    Ok(PinSubmission {
        flow_id,
        pin: pin.to_string(),
        redirect_target,
    })
}

/// The session recorded for a directory lookup result.
pub fn record_pin_outcome(user: Option<&UserRecord>) -> FlowSession {
    match user {
        Some(user) => FlowSession::Success { user: user.clone() },
        None => FlowSession::Failed,
    }
}

/// Decision for a flow that is being started.
///
/// Only an already successful flow short-circuits; anything else, including a
/// failed attempt, is sent back to the PIN-entry page.
pub fn decide_initiate(session: Option<&FlowSession>, pin_entry: Url) -> Decision {
    match session {
        Some(FlowSession::Success { user }) => Decision::Success { user: user.clone() },
        _ => Decision::Incomplete {
            redirect: pin_entry,
        },
    }
}

/// Decision for a status check on a flow.
pub fn decide_status(session: Option<&FlowSession>) -> Result<Decision> {
    match session {
        Some(FlowSession::Success { user }) => Ok(Decision::Success { user: user.clone() }),
        Some(FlowSession::Failed) => Ok(Decision::Failed {
            reason: FailureReason::UserNotFound,
        }),
        None => Err(FlowError::InvalidFlowId),
    }
}

/// Decision for the combined authenticate call.
///
/// A recorded flow is reported as-is. An unknown flow is started when a
/// PIN-entry URL could be built for it, and rejected otherwise.
pub fn decide_authenticate(
    session: Option<&FlowSession>,
    pin_entry: Option<Url>,
) -> Result<Decision> {
    match (session, pin_entry) {
        (Some(session), _) => decide_status(Some(session)),
        (None, Some(pin_entry)) => Ok(decide_initiate(None, pin_entry)),
        (None, None) => Err(FlowError::InvalidFlowId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{Claim, UserDirectory};

    fn pin_entry() -> Url {
        Url::parse("http://localhost:3000/pin-entry?flowId=abc").unwrap()
    }

    fn emily() -> UserRecord {
        UserDirectory::default().lookup("1234").cloned().unwrap()
    }

    #[test]
    fn require_flow_id_rejects_empty() {
        assert_eq!(require_flow_id(""), Err(FlowError::MissingFlowId));
        assert_eq!(require_flow_id("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn require_tenant_rejects_missing_and_empty() {
        assert_eq!(require_tenant(None), Err(FlowError::MissingTenant));
        assert_eq!(require_tenant(Some("")), Err(FlowError::MissingTenant));
        assert_eq!(require_tenant(Some("acme")), Ok("acme"));
    }

    #[test]
    fn require_tenant_rejects_dot_segments() {
        assert_eq!(
            require_tenant(Some("..")),
            Err(FlowError::InvalidTenant("..".to_string()))
        );
        assert_eq!(
            require_tenant(Some(".")),
            Err(FlowError::InvalidTenant(".".to_string()))
        );
        assert_eq!(require_tenant(Some("carbon.super")), Ok("carbon.super"));
    }

    #[test]
    fn check_pin_submission_requires_every_field() {
        let url = "https://localhost:9443/commonauth";
        assert_eq!(
            check_pin_submission("", "1234", url),
            Err(FlowError::MissingParameters)
        );
        assert_eq!(
            check_pin_submission("abc", "", url),
            Err(FlowError::MissingParameters)
        );
        assert_eq!(
            check_pin_submission("abc", "1234", ""),
            Err(FlowError::MissingParameters)
        );
    }

    #[test]
    fn check_pin_submission_rejects_relative_redirect() {
        let err = check_pin_submission("abc", "1234", "commonauth").unwrap_err();
        assert!(matches!(err, FlowError::InvalidRedirectUrl(_)));
    }

    #[test]
    fn record_pin_outcome_maps_lookup_result() {
        assert_eq!(record_pin_outcome(None), FlowSession::Failed);
        assert_eq!(
            record_pin_outcome(Some(&emily())),
            FlowSession::Success { user: emily() }
        );
    }

    #[test]
    fn decide_initiate_redirects_unknown_flow() {
        assert_eq!(
            decide_initiate(None, pin_entry()),
            Decision::Incomplete {
                redirect: pin_entry()
            }
        );
    }

    #[test]
    fn decide_initiate_redirects_failed_flow() {
        assert_eq!(
            decide_initiate(Some(&FlowSession::Failed), pin_entry()).outcome(),
            "INCOMPLETE"
        );
    }

    #[test]
    fn decide_initiate_short_circuits_successful_flow() {
        let session = FlowSession::Success { user: emily() };
        assert_eq!(
            decide_initiate(Some(&session), pin_entry()),
            Decision::Success { user: emily() }
        );
    }

    #[test]
    fn decide_status_requires_a_record() {
        assert_eq!(decide_status(None), Err(FlowError::InvalidFlowId));
    }

    #[test]
    fn decide_status_reports_recorded_outcome() {
        assert_eq!(
            decide_status(Some(&FlowSession::Failed)),
            Ok(Decision::Failed {
                reason: FailureReason::UserNotFound
            })
        );

        let user = UserRecord {
            id: "u".to_string(),
            claims: vec![Claim::new("http://wso2.org/claims/username", "u")],
        };
        assert_eq!(
            decide_status(Some(&FlowSession::Success { user: user.clone() })),
            Ok(Decision::Success { user })
        );
    }

    #[test]
    fn decide_authenticate_prefers_recorded_outcome() {
        assert_eq!(
            decide_authenticate(Some(&FlowSession::Failed), Some(pin_entry())),
            Ok(Decision::Failed {
                reason: FailureReason::UserNotFound
            })
        );
    }

    #[test]
    fn decide_authenticate_starts_or_rejects_unknown_flow() {
        assert_eq!(
            decide_authenticate(None, Some(pin_entry())).map(|d| d.outcome()),
            Ok("INCOMPLETE")
        );
        assert_eq!(
            decide_authenticate(None, None),
            Err(FlowError::InvalidFlowId)
        );
    }
}
