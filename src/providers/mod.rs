//! Upstream integrations
//!
//! One module per third-party API: it builds the request URL, declares the
//! payload shape it expects and maps that payload into output records.

pub mod darksky;
pub mod google_geocode;
pub mod hiking_project;
pub mod meetup;
pub mod tmdb;
pub mod yelp;
