//! # Common Types
//!
//! This module contains the record types fetched from the GraphQL API and the
//! derived series handed to the chart renderer.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Transaction kind that counts toward XP totals.
pub const XP_TYPE: &str = "xp";

/// The signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub login: Option<String>,
}

impl User {
    /// Display name, falling back to `User {id}` when the login is missing
    pub fn display_name(&self) -> String {
        match self.login.as_deref() {
            Some(login) if !login.is_empty() => login.to_string(),
            _ => format!("User {}", self.id),
        }
    }
}

/// A single ledger entry. Only `type == "xp"` entries count toward XP.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub created_at: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub object_id: Option<i64>,
    #[serde(default)]
    pub event_id: Option<i64>,
}

impl Transaction {
    pub fn is_xp(&self) -> bool {
        self.kind == XP_TYPE
    }

    /// Calendar date of `created_at`, in the timestamp's own offset.
    ///
    /// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` and bare
    /// `YYYY-MM-DD` dates. Returns `None` for anything else.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let raw = self.created_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

/// A graded outcome. `grade >= 1` is a pass; a missing grade never is.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub object_id: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl ResultRecord {
    pub fn is_pass(&self) -> bool {
        self.grade.is_some_and(|g| g >= 1.0)
    }
}

/// Curriculum object (project, exercise, ...).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ObjectRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Event, used only as a label lookup.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub object_id: Option<i64>,
}

/// One point of the cumulative XP line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub cumulative_xp: i64,
}

impl DailyPoint {
    pub fn label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Summed XP for one event, with its resolved label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventXp {
    pub event_id: i64,
    pub label: String,
    pub xp: i64,
}

/// Everything fetched for one profile load.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileData {
    pub user: User,
    pub transactions: Vec<Transaction>,
    pub results: Vec<ResultRecord>,
    pub objects: Vec<ObjectRecord>,
    pub events: Vec<Event>,
}
