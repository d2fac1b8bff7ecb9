use url::Url;

use super::{FlowError, FlowId};

/// Query parameter the identity server uses to resume a flow.
pub const SESSION_DATA_KEY: &str = "sessionDataKey";

/// Base URLs needed to send a user through the PIN-entry page and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinEntryLinks {
    /// Where this service is reachable by the end user's browser.
    pub public_url: Url,
    /// Root of the identity server that owns the flow.
    pub identity_server_url: Url,
}

impl PinEntryLinks {
    pub fn new(public_url: Url, identity_server_url: Url) -> Self {
        Self {
            public_url,
            identity_server_url,
        }
    }

    /// The identity server's `commonauth` endpoint for a tenant.
    pub fn commonauth_url(&self, tenant: &str) -> Url {
        let mut url = self.identity_server_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["t", tenant, "commonauth"]);
        }
        url
    }

    /// The PIN-entry page for a flow, pointing back at the tenant's `commonauth`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinauth_core::flow::{FlowId, PinEntryLinks};
    /// use url::Url;
    ///
    /// let links = PinEntryLinks::new(
    ///     Url::parse("http://localhost:3000").unwrap(),
    ///     Url::parse("https://localhost:9443").unwrap(),
    /// );
    /// let url = links.pin_entry_url(&FlowId::parse("abc").unwrap(), "carbon.super");
    ///
    /// assert_eq!(url.path(), "/pin-entry");
    /// assert!(url
    ///     .query_pairs()
    ///     .any(|(k, v)| k == "redirectUrl" && v == "https://localhost:9443/t/carbon.super/commonauth"));
    /// ```
    pub fn pin_entry_url(&self, flow_id: &FlowId, tenant: &str) -> Url {
        let mut url = self.public_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("pin-entry");
        }
        url.query_pairs_mut()
            .append_pair("redirectUrl", self.commonauth_url(tenant).as_str())
            .append_pair("flowId", flow_id.as_str());
        url
    }
}

/// Appends `sessionDataKey=<flow_id>` to the caller's redirect URL.
///
/// Existing query parameters are kept. Relative or malformed URLs are rejected.
pub fn append_session_data_key(redirect_url: &str, flow_id: &FlowId) -> Result<Url, FlowError> {
    let mut url =
        Url::parse(redirect_url).map_err(|e| FlowError::InvalidRedirectUrl(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair(SESSION_DATA_KEY, flow_id.as_str());
    Ok(url)
}
