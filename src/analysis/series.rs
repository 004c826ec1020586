use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use crate::types::{DailyPoint, Event, EventXp, Transaction};

/// Cumulative XP per calendar day, ascending by date.
///
/// Amounts are summed as given, so the last point always equals
/// [`total_xp`](crate::analysis::total_xp). The series is non-decreasing as
/// long as no day has a negative net; a negative net shows up as a dip.
///
/// Transactions whose timestamp cannot be parsed are skipped. Callers show an
/// empty-state placeholder instead of a chart when the result is empty.
pub fn daily_cumulative(transactions: &[Transaction]) -> Vec<DailyPoint> {
    let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for tx in transactions.iter().filter(|t| t.is_xp()) {
        match tx.calendar_date() {
            Some(date) => *per_day.entry(date).or_insert(0) += tx.amount,
            None => warn!(created_at = %tx.created_at, path = %tx.path, "skipping transaction with unparseable timestamp"),
        }
    }

    let mut cumulative = 0;
    per_day
        .into_iter()
        .map(|(date, amount)| {
            cumulative += amount;
            DailyPoint {
                date,
                cumulative_xp: cumulative,
            }
        })
        .collect()
}

/// Event id → display label. Events without a path get `Event {id}`.
pub fn event_labels(events: &[Event]) -> HashMap<i64, String> {
    events
        .iter()
        .map(|e| {
            let label = match e.path.as_deref() {
                Some(path) if !path.is_empty() => path.to_string(),
                _ => fallback_label(e.id),
            };
            (e.id, label)
        })
        .collect()
}

fn fallback_label(event_id: i64) -> String {
    format!("Event {}", event_id)
}

/// XP summed per event, ordered by event id. Transactions without an event
/// are skipped.
pub fn by_event(transactions: &[Transaction], labels: &HashMap<i64, String>) -> Vec<EventXp> {
    let mut per_event: BTreeMap<i64, i64> = BTreeMap::new();
    for tx in transactions.iter().filter(|t| t.is_xp()) {
        if let Some(event_id) = tx.event_id {
            *per_event.entry(event_id).or_insert(0) += tx.amount;
        }
    }

    per_event
        .into_iter()
        .map(|(event_id, xp)| EventXp {
            event_id,
            label: labels
                .get(&event_id)
                .cloned()
                .unwrap_or_else(|| fallback_label(event_id)),
            xp,
        })
        .collect()
}
