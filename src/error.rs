use thiserror::Error;

/// Errors raised while signing in, fetching or configuring.
#[derive(Debug, Error)]
pub enum Error {
    /// The sign-in endpoint rejected the credentials
    #[error("invalid credentials (HTTP {status})")]
    InvalidCredentials { status: u16 },

    /// Sign-in succeeded but returned nothing usable as a token
    #[error("sign-in returned an empty token")]
    EmptyToken,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The bearer token expired or was revoked (HTTP 401)
    #[error("session expired or invalid")]
    Unauthorized,

    /// The GraphQL response carried a non-empty `errors` array
    #[error("GraphQL query failed: {0}")]
    Query(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error must end the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
