//! Yelp Fusion business search

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::GatewayError;
use crate::models::{Business, Coordinates};
use crate::upstream::{Auth, Upstream, UpstreamClient};

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub businesses: Vec<BusinessResult>,
}

#[derive(Debug, Deserialize)]
pub struct BusinessResult {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub rating: f64,
    pub price: Option<String>,
}

impl From<BusinessResult> for Business {
    fn from(business: BusinessResult) -> Self {
        Business {
            name: business.name,
            url: business.url,
            image_url: business.image_url,
            rating: business.rating,
            price: business.price,
        }
    }
}

#[must_use]
pub fn search_url(base_url: &str, at: Coordinates) -> String {
    format!(
        "{}/v3/businesses/search?latitude={}&longitude={}",
        base_url, at.latitude, at.longitude
    )
}

/// Businesses around a coordinate pair; the key travels as a bearer token
#[instrument(skip(client))]
pub async fn get_yelp(client: &UpstreamClient, at: Coordinates) -> Result<Vec<Business>, GatewayError> {
    let upstream = Upstream::Yelp;
    let token = client.api_key(upstream)?;
    let url = search_url(client.base_url(upstream), at);

    let response: SearchResponse = client.get_json(upstream, &url, Auth::Bearer(token)).await?;
    let businesses: Vec<Business> = response.businesses.into_iter().map(Business::from).collect();

    info!("Found {} businesses", businesses.len());
    Ok(businesses)
}
