//! Meetup event record

use serde::{Deserialize, Serialize};

use super::format_day;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Event {
    /// Event page
    pub link: String,
    /// URL key of the hosting group
    pub urlname: String,
    /// Name of the hosting group
    pub host: String,
    /// Last update as a day string
    pub updated: String,
}

impl Event {
    /// `updated_millis` is the Meetup timestamp in milliseconds since the epoch
    #[must_use]
    pub fn new(link: String, urlname: String, host: String, updated_millis: i64) -> Self {
        Self {
            link,
            urlname,
            host,
            updated: format_day(updated_millis.div_euclid(1000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_updated_from_millis() {
        let event = Event::new(
            "https://www.meetup.com/seattle-rust/events/123/".to_string(),
            "seattle-rust".to_string(),
            "Seattle Rust User Group".to_string(),
            1_535_958_000_123,
        );
        assert_eq!(event.updated, "Mon Sep 03 2018");
        assert_eq!(event.urlname, "seattle-rust");
    }
}
