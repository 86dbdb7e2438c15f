//! Hiking Project trail data

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::GatewayError;
use crate::models::trail::split_condition_date;
use crate::models::{Coordinates, Trail};
use crate::upstream::{Auth, Upstream, UpstreamClient};

/// Search radius in miles
pub const MAX_DISTANCE_MILES: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct TrailsResponse {
    pub trails: Vec<TrailResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailResult {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub condition_date: String,
    #[serde(default)]
    pub condition_status: String,
    #[serde(default)]
    pub stars: f64,
    #[serde(default)]
    pub star_votes: u64,
    #[serde(default)]
    pub summary: String,
}

impl From<TrailResult> for Trail {
    fn from(trail: TrailResult) -> Self {
        let (condition_date, condition_time) = split_condition_date(&trail.condition_date);
        Trail {
            name: trail.name,
            trail_url: trail.url,
            location: trail.location,
            length: trail.length,
            condition_date,
            condition_time,
            conditions: trail.condition_status,
            stars: trail.stars,
            star_votes: trail.star_votes,
            summary: trail.summary,
        }
    }
}

#[must_use]
pub fn trails_url(base_url: &str, at: Coordinates, api_key: &str) -> String {
    format!(
        "{}/data/get-trails?lat={}&lon={}&maxDistance={}&key={}",
        base_url, at.latitude, at.longitude, MAX_DISTANCE_MILES, api_key
    )
}

/// Trails within [`MAX_DISTANCE_MILES`] of a coordinate pair
#[instrument(skip(client))]
pub async fn get_trails(client: &UpstreamClient, at: Coordinates) -> Result<Vec<Trail>, GatewayError> {
    let upstream = Upstream::Trails;
    let url = trails_url(client.base_url(upstream), at, client.api_key(upstream)?);

    let response: TrailsResponse = client.get_json(upstream, &url, Auth::InUrl).await?;
    let trails: Vec<Trail> = response.trails.into_iter().map(Trail::from).collect();

    info!("Found {} trails", trails.len());
    Ok(trails)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trails_url() {
        let at = Coordinates {
            latitude: 47.6,
            longitude: -122.33,
        };
        assert_eq!(
            trails_url("https://www.hikingproject.com", at, "k"),
            "https://www.hikingproject.com/data/get-trails?lat=47.6&lon=-122.33&maxDistance=10&key=k"
        );
    }

    #[test]
    fn test_trail_mapping_splits_condition_date() {
        let result: TrailResult = serde_json::from_value(json!({
            "id": 7011192,
            "name": "Rattlesnake Ledge",
            "url": "https://www.hikingproject.com/trail/7011192/rattlesnake-ledge",
            "location": "North Bend, Washington",
            "length": 4.3,
            "conditionDate": "2018-09-01T10:15:00",
            "conditionStatus": "All Clear",
            "stars": 4.4,
            "starVotes": 84,
            "summary": "A popular hike to a fantastic view."
        }))
        .unwrap();

        let trail = Trail::from(result);
        assert_eq!(trail.name, "Rattlesnake Ledge");
        assert_eq!(
            trail.trail_url,
            "https://www.hikingproject.com/trail/7011192/rattlesnake-ledge"
        );
        assert_eq!(trail.location, "North Bend, Washington");
        assert_eq!(trail.length, 4.3);
        assert_eq!(trail.condition_date, "2018-09-01");
        assert_eq!(trail.condition_time, "10:15:00");
        assert_eq!(trail.conditions, "All Clear");
        assert_eq!(trail.stars, 4.4);
        assert_eq!(trail.star_votes, 84);
        assert_eq!(trail.summary, "A popular hike to a fantastic view.");
    }
}
