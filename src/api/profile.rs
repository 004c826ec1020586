use tracing::{info, warn};

use super::GraphqlClient;
use crate::error::{Error, Result};
use crate::types::ProfileData;

/// Outcome of a profile load that did not end the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileLoad {
    /// `None` when no user record could be fetched
    pub data: Option<ProfileData>,
    /// Fetch failures to surface as transient banners
    pub notices: Vec<String>,
}

/// User-facing text for a failed fetch
pub fn notice_for(error: &Error) -> String {
    match error {
        Error::Query(message) => format!("GraphQL query failed: {}", message),
        Error::Network(_) => "Network error: Failed to connect to GraphQL API".to_string(),
        Error::Decode(_) => "Unexpected response from GraphQL API".to_string(),
        other => format!("Failed to load profile data: {}", other),
    }
}

/// Keep `Unauthorized` fatal; turn any other failure into a notice and an
/// empty value.
fn recover<T: Default>(result: Result<T>, what: &str, notices: &mut Vec<String>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(Error::Unauthorized) => Err(Error::Unauthorized),
        Err(e) => {
            warn!(error = %e, "fetching {} failed", what);
            notices.push(notice_for(&e));
            Ok(T::default())
        }
    }
}

/// Fetch user, transactions, results, objects and events, one after another.
///
/// A 401 from any call aborts the load with `Error::Unauthorized`. Other
/// failures leave the affected collection empty and add a notice.
pub async fn load_profile(client: &GraphqlClient) -> Result<ProfileLoad> {
    let mut notices = Vec::new();

    let user = recover(client.fetch_user().await, "user", &mut notices)?;
    let Some(user) = user else {
        return Ok(ProfileLoad {
            data: None,
            notices,
        });
    };

    let transactions = recover(client.fetch_transactions().await, "transactions", &mut notices)?;
    let results = recover(client.fetch_results().await, "results", &mut notices)?;
    let objects = recover(client.fetch_objects().await, "objects", &mut notices)?;
    let events = recover(client.fetch_events().await, "events", &mut notices)?;

    info!(
        user = user.id,
        transactions = transactions.len(),
        results = results.len(),
        objects = objects.len(),
        events = events.len(),
        "profile loaded"
    );

    Ok(ProfileLoad {
        data: Some(ProfileData {
            user,
            transactions,
            results,
            objects,
            events,
        }),
        notices,
    })
}
