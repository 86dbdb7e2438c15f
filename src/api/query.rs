//! Inbound query parameter extraction
//!
//! The browser client sends nested objects in bracket form, so
//! `data.latitude` arrives as `data[latitude]=47.6`. The dotted spelling is
//! accepted as well.

use std::collections::HashMap;

use crate::error::GatewayError;
use crate::models::Coordinates;

/// Decoded query string of one request
#[derive(Debug, Default, Clone)]
pub struct RouteQuery {
    params: HashMap<String, String>,
}

impl From<HashMap<String, String>> for RouteQuery {
    fn from(params: HashMap<String, String>) -> Self {
        Self { params }
    }
}

impl RouteQuery {
    /// Top-level `data` value, used by the location lookup
    pub fn data(&self) -> Result<&str, GatewayError> {
        non_empty("data", self.params.get("data").map(String::as_str))
    }

    /// A field nested under `data`
    pub fn data_field(&self, field: &str) -> Result<&str, GatewayError> {
        let bracketed = format!("data[{field}]");
        let dotted = format!("data.{field}");
        let value = self
            .params
            .get(&bracketed)
            .or_else(|| self.params.get(&dotted))
            .map(String::as_str);
        non_empty(&bracketed, value)
    }

    /// `data[latitude]` and `data[longitude]` as a validated pair
    pub fn coordinates(&self) -> Result<Coordinates, GatewayError> {
        let latitude = parse_degrees(self.data_field("latitude")?, "latitude", 90.0)?;
        let longitude = parse_degrees(self.data_field("longitude")?, "longitude", 180.0)?;
        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}

/// Blank values count as missing; anything else is returned as sent
fn non_empty<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, GatewayError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GatewayError::invalid_query(format!("missing {name}"))),
    }
}

fn parse_degrees(raw: &str, name: &str, limit: f64) -> Result<f64, GatewayError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GatewayError::invalid_query(format!("{name} '{raw}' is not a number")))?;

    if !value.is_finite() || value.abs() > limit {
        return Err(GatewayError::invalid_query(format!(
            "{name} {value} is outside ±{limit}"
        )));
    }
    Ok(value)
}
