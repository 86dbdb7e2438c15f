//! City Explorer gateway
//!
//! Accepts location and search queries from the City Explorer client, forwards
//! each one to a single third-party API and returns a small normalized record.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod telemetry;
pub mod upstream;
pub mod web;

// Re-export core types for public API
pub use api::{AppState, RouteQuery};
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use models::{Business, Coordinates, Event, Location, Movie, Trail, Weather};
pub use upstream::{Upstream, UpstreamClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GatewayError>;
