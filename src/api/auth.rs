use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use tracing::{debug, warn};

use crate::app::Session;
use crate::error::{Error, Result};

/// `Authorization` header value for HTTP Basic sign-in
pub fn basic_credentials(identifier: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", identifier, password)))
}

/// Sign-in returns the token as raw text, sometimes wrapped in JSON quotes.
pub fn clean_token(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
    unquoted.trim().to_string()
}

/// Exchange credentials for a session.
///
/// Non-success statuses are `InvalidCredentials`; transport failures are
/// `Network`. Neither is retried.
pub async fn sign_in(
    client: &Client,
    signin_url: &str,
    identifier: &str,
    password: &str,
) -> Result<Session> {
    debug!(url = signin_url, identifier, "signing in");
    let response = client
        .post(signin_url)
        .header(reqwest::header::AUTHORIZATION, basic_credentials(identifier, password))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!(status = status.as_u16(), body = %body, "sign-in rejected");
        return Err(Error::InvalidCredentials {
            status: status.as_u16(),
        });
    }

    Session::new(clean_token(&body)).ok_or(Error::EmptyToken)
}
