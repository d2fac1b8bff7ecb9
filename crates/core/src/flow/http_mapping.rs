//! Pure functions for mapping flow errors to HTTP status codes.

use super::FlowError;

/// Maps a [`FlowError`] to an HTTP status code.
///
/// Every caller mistake is a 400; only storage failures are a 500.
///
/// # Examples
///
/// ```
/// use pinauth_core::flow::{flow_error_to_status_code, FlowError};
///
/// assert_eq!(flow_error_to_status_code(&FlowError::InvalidFlowId), 400);
/// assert_eq!(flow_error_to_status_code(&FlowError::Storage("down".into())), 500);
/// ```
pub fn flow_error_to_status_code(error: &FlowError) -> u16 {
    match error {
        FlowError::MissingFlowId => 400,
        FlowError::MissingParameters => 400,
        FlowError::InvalidFlowId => 400,
        FlowError::MissingTenant => 400,
        FlowError::InvalidTenant(_) => 400,
        FlowError::InvalidRedirectUrl(_) => 400,
        FlowError::Storage(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors_map_to_400() {
        for error in [
            FlowError::MissingFlowId,
            FlowError::MissingParameters,
            FlowError::InvalidFlowId,
            FlowError::MissingTenant,
            FlowError::InvalidTenant("..".to_string()),
            FlowError::InvalidRedirectUrl("relative URL without a base".to_string()),
        ] {
            assert_eq!(flow_error_to_status_code(&error), 400, "{error}");
        }
    }

    #[test]
    fn test_storage_maps_to_500() {
        let error = FlowError::Storage("lock poisoned".to_string());
        assert_eq!(flow_error_to_status_code(&error), 500);
    }
}
