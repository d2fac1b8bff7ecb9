//! HTTP handlers for the PIN flow routes.

use std::fmt;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer,
};

use crate::error::AuthError;
use crate::extractors::FormOrJson;
use crate::response::ActionResponse;
use crate::templates;
use crate::AuthState;

/// Body of an authenticate callback from the identity server.
///
/// JSON bodies nest the tenant under `event.tenant.name`. Form bodies are flat,
/// so the tenant is read from an `event[tenant][name]`, `event.tenant.name` or
/// `tenant` key instead.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub flow_id: String,
    #[serde(default)]
    pub event: Option<AuthenticateEvent>,
    #[serde(
        default,
        rename = "event[tenant][name]",
        alias = "event.tenant.name",
        alias = "tenant"
    )]
    pub form_tenant: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AuthenticateEvent {
    #[serde(default)]
    pub tenant: Option<Tenant>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Tenant {
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthenticateRequest {
    pub fn tenant_name(&self) -> Option<&str> {
        self.event
            .as_ref()
            .and_then(|e| e.tenant.as_ref())
            .and_then(|t| t.name.as_deref())
            .or(self.form_tenant.as_deref())
    }
}

/// Query parameters for the PIN-entry page.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PinEntryQuery {
    pub flow_id: Option<String>,
    pub redirect_url: Option<String>,
}

/// PIN form submission.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PinForm {
    #[serde(default, deserialize_with = "lenient_string")]
    pub flow_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pin: String,
    #[serde(default)]
    pub redirect_url: String,
}

/// Reads a scalar field as a string, so numeric ids and PINs posted as JSON
/// numbers are accepted. `null` reads as empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientString;

    impl Visitor<'_> for LenientString {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(LenientString)
}

/// Creates the router with all PIN flow routes.
///
/// Routes:
/// - `POST /authenticate` - Report a recorded flow, or start an unknown one
/// - `POST /authenticate/initiate` - Start a flow (redirect to PIN entry)
/// - `POST /authenticate/status` - Report a recorded flow
/// - `GET /pin-entry` - PIN-entry form
/// - `POST /validate-pin` - Record the PIN outcome and redirect back
pub fn auth_routes() -> Router<AuthState> {
    Router::new()
        .route("/authenticate", post(authenticate))
        .route("/authenticate/initiate", post(initiate))
        .route("/authenticate/status", post(status))
        .route("/pin-entry", get(pin_entry))
        .route("/validate-pin", post(validate_pin))
}

async fn authenticate(
    State(state): State<AuthState>,
    FormOrJson(body): FormOrJson<AuthenticateRequest>,
) -> Result<Json<ActionResponse>, AuthError> {
    let decision = state
        .tracker
        .authenticate(&body.flow_id, body.tenant_name())
        .await?;
    Ok(Json(decision.into()))
}

async fn initiate(
    State(state): State<AuthState>,
    FormOrJson(body): FormOrJson<AuthenticateRequest>,
) -> Result<Json<ActionResponse>, AuthError> {
    let decision = state
        .tracker
        .initiate_authentication(&body.flow_id, body.tenant_name())
        .await?;
    Ok(Json(decision.into()))
}

async fn status(
    State(state): State<AuthState>,
    FormOrJson(body): FormOrJson<AuthenticateRequest>,
) -> Result<Json<ActionResponse>, AuthError> {
    let decision = state
        .tracker
        .check_authentication_status(&body.flow_id)
        .await?;
    Ok(Json(decision.into()))
}

async fn pin_entry(Query(query): Query<PinEntryQuery>) -> Html<String> {
    Html(templates::pin_entry_page(
        query.flow_id.as_deref(),
        query.redirect_url.as_deref(),
    ))
}

async fn validate_pin(
    State(state): State<AuthState>,
    FormOrJson(form): FormOrJson<PinForm>,
) -> Result<Response, AuthError> {
    let target = state
        .tracker
        .validate_pin(&form.flow_id, &form.pin, &form.redirect_url)
        .await?;

    let location = HeaderValue::from_str(target.as_str())
        .map_err(|e| AuthError::InvalidHeader(e.to_string()))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
