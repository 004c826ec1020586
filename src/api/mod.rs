mod auth;
mod graphql;
mod profile;
mod queries;

pub use auth::{basic_credentials, clean_token, sign_in};
pub use graphql::{http_client, GraphqlClient};
pub use profile::{load_profile, notice_for, ProfileLoad};
