//! Outbound HTTP client shared by every route
//!
//! Each inbound request issues exactly one GET through [`UpstreamClient::get_json`].
//! There is no retry and no timeout beyond the transport default.

use std::fmt;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Third-party APIs the gateway talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    Geocode,
    Weather,
    Movies,
    Yelp,
    Trails,
    Meetup,
}

impl Upstream {
    pub const ALL: [Upstream; 6] = [
        Upstream::Geocode,
        Upstream::Weather,
        Upstream::Movies,
        Upstream::Yelp,
        Upstream::Trails,
        Upstream::Meetup,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Upstream::Geocode => "geocode",
            Upstream::Weather => "weather",
            Upstream::Movies => "movies",
            Upstream::Yelp => "yelp",
            Upstream::Trails => "trails",
            Upstream::Meetup => "meetup",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the credential travels with the request
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    /// The key is already interpolated into the URL
    InUrl,
    /// `Authorization: Bearer <key>`
    Bearer(&'a str),
}

/// Thin HTTP capability handed to every handler
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    config: GatewayConfig,
}

impl UpstreamClient {
    /// Create a new client from the gateway configuration
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .user_agent(concat!("city-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Base URL configured for an upstream
    #[must_use]
    pub fn base_url(&self, upstream: Upstream) -> &str {
        self.config.upstream.base_url(upstream)
    }

    /// API key configured for an upstream
    pub fn api_key(&self, upstream: Upstream) -> Result<&str, GatewayError> {
        self.config
            .api_keys
            .get(upstream)
            .ok_or(GatewayError::MissingCredential { upstream })
    }

    /// Issue one GET and decode the JSON body.
    ///
    /// Transport failures, non-2xx statuses and bodies that do not match `T`
    /// all surface as upstream errors.
    #[instrument(name = "upstream_get", skip(self, url, auth))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        upstream: Upstream,
        url: &str,
        auth: Auth<'_>,
    ) -> Result<T, GatewayError> {
        debug!("Calling {}", redact(url, self.config.api_keys.get(upstream)));

        let mut request = self.client.get(url);
        if let Auth::Bearer(token) = auth {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|source| GatewayError::Transport { upstream, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status { upstream, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| GatewayError::Transport { upstream, source })?;

        serde_json::from_slice(&body).map_err(|e| GatewayError::payload(upstream, e.to_string()))
    }
}

/// Hide the credential before a URL is logged
fn redact(url: &str, key: Option<&str>) -> String {
    match key {
        Some(key) => url.replace(key, "***"),
        None => url.to_string(),
    }
}
