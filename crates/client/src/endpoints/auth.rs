//! Keystone v3 token issue.

use std::time::Duration;

use openstack_config::AuthConfig;
use openstack_config::constants::SUBJECT_TOKEN_HEADER;
use reqwest::Client;
use secrecy::SecretString;
use tracing::debug;

use crate::auth::token_request_body;
use crate::endpoints::request::{map_transport_error, send_request};
use crate::error::{ClientError, Result};
use crate::models::{TokenBody, TokenResponse};

/// A freshly issued token and the body Keystone returned with it.
#[derive(Debug)]
pub struct IssuedToken {
    pub token: SecretString,
    pub body: TokenBody,
}

/// Request a token from `POST {auth_url}/auth/tokens`.
///
/// `auth_url` is the normalized identity root ending in `/v3`.
pub async fn issue_token(
    client: &Client,
    auth_url: &str,
    auth: &AuthConfig,
    timeout: Duration,
) -> Result<IssuedToken> {
    debug!(method = auth.method.name(), "Requesting Keystone token");

    let url = format!("{}/auth/tokens", auth_url);
    let builder = client.post(&url).json(&token_request_body(auth));
    let response = send_request(builder, "token request", timeout).await?;

    let token = response
        .headers()
        .get(SUBJECT_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| SecretString::new(s.to_string().into()))
        .ok_or_else(|| {
            ClientError::AuthFailed(format!("response is missing the {SUBJECT_TOKEN_HEADER} header"))
        })?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| map_transport_error(e, "token request", timeout))?;
    let parsed: TokenResponse = serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("token response: {e}")))?;

    debug!(
        services = parsed.token.catalog.len(),
        expires_at = ?parsed.token.expires_at,
        "Keystone token issued"
    );

    Ok(IssuedToken {
        token,
        body: parsed.token,
    })
}
