use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::warn;
use crate::auth::credentials::CredentialStore;
use crate::core::command::CommandError;
use crate::core::controller::{AppState, ServerError};

// AuthContext identifies the administrator making a request. Handlers that take it
// as an argument reject requests without valid Basic credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    pub principal: String,
}

impl AuthContext {
    pub fn authenticate(header: Option<&str>, credentials: &dyn CredentialStore) -> Result<AuthContext, CommandError> {
        let header = header.ok_or_else(|| unauthenticated("missing authorization header"))?;
        let (id, password) = parse_basic(header)
            .ok_or_else(|| unauthenticated("malformed basic authorization header"))?;
        if !credentials.has_credential(id.as_str()) || !credentials.verify(id.as_str(), password.as_str()) {
            warn!(principal = id.as_str(), "rejected credentials");
            return Err(unauthenticated("invalid credentials"));
        }
        Ok(AuthContext { principal: id })
    }
}

// decodes `Basic base64(id:password)` into its two parts
pub fn parse_basic(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, password) = decoded.split_once(':')?;
    if id.is_empty() {
        return None;
    }
    Some((id.to_string(), password.to_string()))
}

fn unauthenticated(message: &str) -> CommandError {
    CommandError::Unauthenticated { message: message.to_string() }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        AuthContext::authenticate(header, state.credentials.as_ref()).map_err(Into::into)
    }
}
