//! Action responses returned to the identity server.

use serde::{Deserialize, Serialize};

use pinauth_core::flow::{Decision, UserRecord};

/// JSON body of every authenticate-type response, tagged by `actionStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "actionStatus", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionResponse {
    Success {
        data: SuccessData,
    },
    Incomplete {
        operations: Vec<Operation>,
    },
    Failed {
        #[serde(rename = "failureReason")]
        failure_reason: String,
        #[serde(rename = "failureDescription")]
        failure_description: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessData {
    pub user: UserRecord,
}

/// Follow-up the identity server must perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub op: OperationKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Redirect,
}

impl ActionResponse {
    pub fn failed(reason: &str, description: &str) -> Self {
        Self::Failed {
            failure_reason: reason.to_string(),
            failure_description: description.to_string(),
        }
    }
}

impl From<Decision> for ActionResponse {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Success { user } => Self::Success {
                data: SuccessData { user },
            },
            Decision::Incomplete { redirect } => Self::Incomplete {
                operations: vec![Operation {
                    op: OperationKind::Redirect,
                    url: redirect.to_string(),
                }],
            },
            Decision::Failed { reason } => Self::failed(reason.code(), reason.description()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinauth_core::flow::{FailureReason, UserDirectory};
    use serde_json::json;
    use url::Url;

    #[test]
    fn success_wraps_user_in_data() {
        let user = UserDirectory::default().lookup("1234").cloned().unwrap();
        let json = serde_json::to_value(ActionResponse::from(Decision::Success { user })).unwrap();

        assert_eq!(json["actionStatus"], "SUCCESS");
        assert_eq!(json["data"]["user"]["id"], "9f1ab106-ce85-46b1-8f41-6a071b54eb56");
        assert_eq!(
            json["data"]["user"]["claims"][0],
            json!({ "uri": "http://wso2.org/claims/username", "value": "emilye" })
        );
    }

    #[test]
    fn incomplete_carries_redirect_operation() {
        let redirect = Url::parse("http://localhost:3000/pin-entry?flowId=abc").unwrap();
        let json =
            serde_json::to_value(ActionResponse::from(Decision::Incomplete { redirect })).unwrap();

        assert_eq!(
            json,
            json!({
                "actionStatus": "INCOMPLETE",
                "operations": [
                    { "op": "redirect", "url": "http://localhost:3000/pin-entry?flowId=abc" }
                ]
            })
        );
    }

    #[test]
    fn failed_uses_camel_case_fields() {
        let json = serde_json::to_value(ActionResponse::from(Decision::Failed {
            reason: FailureReason::UserNotFound,
        }))
        .unwrap();

        assert_eq!(
            json,
            json!({
                "actionStatus": "FAILED",
                "failureReason": "userNotFound",
                "failureDescription": "Unable to find user for given credentials."
            })
        );
    }

    #[test]
    fn parses_identity_server_shape() {
        let parsed: ActionResponse = serde_json::from_value(json!({
            "actionStatus": "FAILED",
            "failureReason": "invalidFlowId",
            "failureDescription": "Invalid or expired Flow ID."
        }))
        .unwrap();

        assert_eq!(
            parsed,
            ActionResponse::failed("invalidFlowId", "Invalid or expired Flow ID.")
        );
    }
}
