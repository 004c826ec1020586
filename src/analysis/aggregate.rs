use std::collections::{BTreeSet, HashMap, HashSet};

use crate::types::{ObjectRecord, ResultRecord, Transaction};

/// Which results count toward the success rate and the pass/fail pie
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultFilter {
    All,
    Types(Vec<String>),
}

impl ResultFilter {
    /// An empty type list means every result counts
    pub fn from_types(types: &[String]) -> Self {
        if types.is_empty() {
            ResultFilter::All
        } else {
            ResultFilter::Types(types.to_vec())
        }
    }

    pub fn matches(&self, result: &ResultRecord) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Types(types) => types.iter().any(|t| *t == result.kind),
        }
    }
}

/// Sum of `amount` over XP transactions
pub fn total_xp(transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .filter(|t| t.is_xp())
        .map(|t| t.amount)
        .sum()
}

/// Number of distinct objects that earned positive XP
pub fn completed_count(transactions: &[Transaction]) -> usize {
    completed_object_ids(transactions).len()
}

fn completed_object_ids(transactions: &[Transaction]) -> HashSet<i64> {
    transactions
        .iter()
        .filter(|t| t.is_xp() && t.amount > 0)
        .filter_map(|t| t.object_id)
        .collect()
}

/// Names of the completed objects, sorted and de-duplicated
pub fn completed_names(transactions: &[Transaction], objects: &[ObjectRecord]) -> Vec<String> {
    let names: HashMap<i64, &str> = objects
        .iter()
        .filter(|o| !o.name.is_empty())
        .map(|o| (o.id, o.name.as_str()))
        .collect();

    completed_object_ids(transactions)
        .into_iter()
        .map(|id| match names.get(&id) {
            Some(name) => name.to_string(),
            None => format!("Object {}", id),
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Pass and fail counts over the filtered results
pub fn pass_fail(results: &[ResultRecord], filter: &ResultFilter) -> (usize, usize) {
    results
        .iter()
        .filter(|r| filter.matches(r))
        .fold((0, 0), |(pass, fail), r| {
            if r.is_pass() {
                (pass + 1, fail)
            } else {
                (pass, fail + 1)
            }
        })
}

/// Percentage of passes among the filtered results, rounded to the nearest
/// integer. Zero when nothing matches the filter.
pub fn success_rate(results: &[ResultRecord], filter: &ResultFilter) -> u32 {
    let (pass, fail) = pass_fail(results, filter);
    percent(pass, pass + fail)
}

/// `part / total` as a rounded percentage, zero for an empty total
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}
