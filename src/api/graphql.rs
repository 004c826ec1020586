use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::app::Session;
use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// Bearer-authenticated client for the GraphQL endpoint.
pub struct GraphqlClient {
    client: Client,
    api_url: String,
    session: Session,
}

impl GraphqlClient {
    pub fn new(client: Client, api_url: impl Into<String>, session: Session) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            session,
        }
    }

    pub fn from_config(config: &Config, session: Session) -> Result<Self> {
        Ok(Self::new(http_client(config)?, config.api_url.clone(), session))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run a query and decode its `data` member.
    ///
    /// HTTP 401 is `Unauthorized`; a non-empty `errors` array is `Query`
    /// carrying the first message.
    pub async fn query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<Option<T>> {
        let response = self
            .client
            .post(&self.api_url)
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "GraphQL response");
        if status == StatusCode::UNAUTHORIZED {
            warn!("token expired or invalid");
            return Err(Error::Unauthorized);
        }

        let body = response.text().await?;
        let parsed: GraphqlResponse<T> = serde_json::from_str(&body)?;
        if let Some(first) = parsed.errors.as_ref().and_then(|errors| errors.first()) {
            warn!(errors = ?parsed.errors, "GraphQL errors");
            return Err(Error::Query(first.message.clone()));
        }
        Ok(parsed.data)
    }
}

/// HTTP client with the configured request timeout
pub fn http_client(config: &Config) -> Result<Client> {
    Ok(Client::builder().timeout(config.request_timeout()).build()?)
}
