use serde::Deserialize;
use serde_json::json;

use super::GraphqlClient;
use crate::error::Result;
use crate::types::{Event, ObjectRecord, ResultRecord, Transaction, User};

const USER_QUERY: &str = "query { user { id login } }";
const TRANSACTION_QUERY: &str =
    "query { transaction { type amount createdAt path objectId eventId } }";
const RESULT_QUERY: &str = "query { result { grade objectId type } }";
const OBJECT_QUERY: &str = "query { object { id name type } }";
const EVENT_QUERY: &str = "query { event { id path objectId } }";

#[derive(Deserialize)]
struct UserData {
    #[serde(default)]
    user: Vec<User>,
}

#[derive(Deserialize)]
struct TransactionData {
    #[serde(default)]
    transaction: Vec<Transaction>,
}

#[derive(Deserialize)]
struct ResultData {
    #[serde(default)]
    result: Vec<ResultRecord>,
}

#[derive(Deserialize)]
struct ObjectData {
    #[serde(default)]
    object: Vec<ObjectRecord>,
}

#[derive(Deserialize)]
struct EventData {
    #[serde(default)]
    event: Vec<Event>,
}

impl GraphqlClient {
    /// The signed-in user; the API scopes `user` to the bearer token
    pub async fn fetch_user(&self) -> Result<Option<User>> {
        let data: Option<UserData> = self.query(USER_QUERY, json!({})).await?;
        Ok(data.and_then(|d| d.user.into_iter().next()))
    }

    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>> {
        let data: Option<TransactionData> = self.query(TRANSACTION_QUERY, json!({})).await?;
        Ok(data.map(|d| d.transaction).unwrap_or_default())
    }

    pub async fn fetch_results(&self) -> Result<Vec<ResultRecord>> {
        let data: Option<ResultData> = self.query(RESULT_QUERY, json!({})).await?;
        Ok(data.map(|d| d.result).unwrap_or_default())
    }

    pub async fn fetch_objects(&self) -> Result<Vec<ObjectRecord>> {
        let data: Option<ObjectData> = self.query(OBJECT_QUERY, json!({})).await?;
        Ok(data.map(|d| d.object).unwrap_or_default())
    }

    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        let data: Option<EventData> = self.query(EVENT_QUERY, json!({})).await?;
        Ok(data.map(|d| d.event).unwrap_or_default())
    }
}
