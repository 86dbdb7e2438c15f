//! Meetup upcoming events

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::GatewayError;
use crate::models::Event;
use crate::upstream::{Auth, Upstream, UpstreamClient};

/// Topic category every search is pinned to
pub const TOPIC: &str = "tech";

/// Events requested per search
pub const PAGE_SIZE: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct UpcomingEventsResponse {
    pub events: Vec<EventResult>,
}

#[derive(Debug, Deserialize)]
pub struct EventResult {
    pub link: String,
    /// Milliseconds since the epoch
    #[serde(default)]
    pub updated: i64,
    pub group: GroupResult,
}

#[derive(Debug, Deserialize)]
pub struct GroupResult {
    pub urlname: String,
    pub name: String,
}

impl From<EventResult> for Event {
    fn from(event: EventResult) -> Self {
        Event::new(event.link, event.group.urlname, event.group.name, event.updated)
    }
}

#[must_use]
pub fn upcoming_events_url(base_url: &str, api_key: &str) -> String {
    format!(
        "{}/find/upcoming_events?topic_category={}&page={}&key={}",
        base_url, TOPIC, PAGE_SIZE, api_key
    )
}

/// Upcoming events in the fixed topic
#[instrument(skip(client))]
pub async fn get_meetups(client: &UpstreamClient) -> Result<Vec<Event>, GatewayError> {
    let upstream = Upstream::Meetup;
    let url = upcoming_events_url(client.base_url(upstream), client.api_key(upstream)?);

    let response: UpcomingEventsResponse = client.get_json(upstream, &url, Auth::InUrl).await?;
    let events: Vec<Event> = response.events.into_iter().map(Event::from).collect();

    info!("Found {} {} events", events.len(), TOPIC);
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_is_pinned_to_tech() {
        assert_eq!(
            upcoming_events_url("https://api.meetup.com", "k"),
            "https://api.meetup.com/find/upcoming_events?topic_category=tech&page=20&key=k"
        );
    }

    #[test]
    fn test_event_mapping() {
        let response: UpcomingEventsResponse = serde_json::from_value(json!({
            "city": { "city": "Seattle" },
            "events": [
                {
                    "name": "Rust Hack Night",
                    "link": "https://www.meetup.com/seattle-rust/events/254367071/",
                    "updated": 1535958000000i64,
                    "group": {
                        "urlname": "seattle-rust",
                        "name": "Seattle Rust User Group"
                    }
                }
            ]
        }))
        .unwrap();

        let events: Vec<Event> = response.events.into_iter().map(Event::from).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].link,
            "https://www.meetup.com/seattle-rust/events/254367071/"
        );
        assert_eq!(events[0].urlname, "seattle-rust");
        assert_eq!(events[0].host, "Seattle Rust User Group");
        assert_eq!(events[0].updated, "Mon Sep 03 2018");
    }
}
