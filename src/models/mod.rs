//! Output records returned to the client
//!
//! Every record is a flat value built from a single upstream response and
//! serialized as-is. Nothing here is mutated after construction.

pub mod business;
pub mod event;
pub mod location;
pub mod movie;
pub mod trail;
pub mod weather;

pub use business::Business;
pub use event::Event;
pub use location::{Coordinates, Location};
pub use movie::Movie;
pub use trail::Trail;
pub use weather::Weather;

use chrono::DateTime;

/// Render a UNIX timestamp (seconds) as `"Www Mmm DD YYYY"` in UTC.
///
/// Out-of-range timestamps render as an empty string.
#[must_use]
pub fn format_day(epoch_seconds: i64) -> String {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|dt| dt.format("%a %b %d %Y").to_string())
        .unwrap_or_default()
}
