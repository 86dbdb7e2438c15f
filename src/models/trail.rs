//! Trail record and condition timestamp splitting

use serde::{Deserialize, Serialize};

/// Hiking trail near a coordinate pair
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Trail {
    pub name: String,
    pub trail_url: String,
    pub location: String,
    /// Length in miles
    pub length: f64,
    pub condition_date: String,
    pub condition_time: String,
    /// Condition status text
    pub conditions: String,
    pub stars: f64,
    pub star_votes: u64,
    pub summary: String,
}

/// Split a condition timestamp into its date and time parts.
///
/// The upstream sends `YYYY-MM-DD` followed by `T` or a space and `HH:MM:SS`.
/// The time keeps only its `HH:MM:SS` part, so zone or fraction suffixes are
/// dropped. Anything without a separator is treated as a bare date.
#[must_use]
pub fn split_condition_date(raw: &str) -> (String, String) {
    let raw = raw.trim();
    match raw.split_once(['T', ' ']) {
        Some((date, time)) => {
            let time = time.trim();
            let time = time.get(..TIME_LEN).unwrap_or(time);
            (date.to_string(), time.to_string())
        }
        None => (raw.to_string(), String::new()),
    }
}

/// Length of `HH:MM:SS`
const TIME_LEN: usize = 8;
