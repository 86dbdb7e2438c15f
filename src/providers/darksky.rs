//! Dark Sky forecast API

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::GatewayError;
use crate::models::{Coordinates, Weather};
use crate::upstream::{Auth, Upstream, UpstreamClient};

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub data: Vec<DailyPoint>,
}

#[derive(Debug, Deserialize)]
pub struct DailyPoint {
    /// UNIX seconds at the start of the day
    pub time: i64,
    #[serde(default)]
    pub summary: String,
}

impl From<DailyPoint> for Weather {
    fn from(day: DailyPoint) -> Self {
        Weather::new(day.summary, day.time)
    }
}

#[must_use]
pub fn forecast_url(base_url: &str, api_key: &str, at: Coordinates) -> String {
    format!(
        "{}/forecast/{}/{},{}",
        base_url, api_key, at.latitude, at.longitude
    )
}

/// Daily summaries for the coming week
#[instrument(skip(client))]
pub async fn get_weather(client: &UpstreamClient, at: Coordinates) -> Result<Vec<Weather>, GatewayError> {
    let upstream = Upstream::Weather;
    let url = forecast_url(client.base_url(upstream), client.api_key(upstream)?, at);

    let response: ForecastResponse = client.get_json(upstream, &url, Auth::InUrl).await?;
    let days: Vec<Weather> = response.daily.data.into_iter().map(Weather::from).collect();

    info!("Retrieved {} daily forecasts", days.len());
    Ok(days)
}
