//! Google Geocoding API

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::GatewayError;
use crate::models::Location;
use crate::upstream::{Auth, Upstream, UpstreamClient};

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeResponse {
    /// Build the record from the first (best) result
    pub fn into_location(self, query: &str) -> Result<Location, GatewayError> {
        let best = self.results.into_iter().next().ok_or_else(|| {
            GatewayError::payload(Upstream::Geocode, format!("no results for '{query}'"))
        })?;

        Ok(Location {
            search_query: query.to_string(),
            formatted_query: best.formatted_address,
            latitude: best.geometry.location.lat,
            longitude: best.geometry.location.lng,
        })
    }
}

#[must_use]
pub fn geocode_url(base_url: &str, query: &str, api_key: &str) -> String {
    format!(
        "{}/maps/api/geocode/json?address={}&key={}",
        base_url,
        urlencoding::encode(query),
        api_key
    )
}

/// Resolve free text to a single location
#[instrument(skip(client))]
pub async fn search_to_lat_long(client: &UpstreamClient, query: &str) -> Result<Location, GatewayError> {
    let upstream = Upstream::Geocode;
    let url = geocode_url(client.base_url(upstream), query, client.api_key(upstream)?);

    let response: GeocodeResponse = client.get_json(upstream, &url, Auth::InUrl).await?;
    let location = response.into_location(query)?;

    info!(
        "Geocoded '{}' to {} ({})",
        query,
        location.formatted_query,
        location.format_coordinates()
    );
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geocode_url_encodes_query() {
        assert_eq!(
            geocode_url("https://maps.googleapis.com", "Lynnwood, WA", "k"),
            "https://maps.googleapis.com/maps/api/geocode/json?address=Lynnwood%2C%20WA&key=k"
        );
    }

    #[test]
    fn test_first_result_wins() {
        let response: GeocodeResponse = serde_json::from_value(json!({
            "results": [
                {
                    "formatted_address": "Seattle, WA, USA",
                    "geometry": { "location": { "lat": 47.6062095, "lng": -122.3320708 } }
                },
                {
                    "formatted_address": "Seattle Heights, WA, USA",
                    "geometry": { "location": { "lat": 47.80, "lng": -122.29 } }
                }
            ],
            "status": "OK"
        }))
        .unwrap();

        let location = response.into_location("seattle").unwrap();
        assert_eq!(location.search_query, "seattle");
        assert_eq!(location.formatted_query, "Seattle, WA, USA");
        assert_eq!(location.latitude, 47.6062095);
        assert_eq!(location.longitude, -122.3320708);
    }

    #[test]
    fn test_zero_results_is_payload_error() {
        let response: GeocodeResponse =
            serde_json::from_value(json!({"results": [], "status": "ZERO_RESULTS"})).unwrap();

        let err = response.into_location("nowhere").unwrap_err();
        assert!(matches!(err, GatewayError::Payload { upstream: Upstream::Geocode, .. }));
    }
}
