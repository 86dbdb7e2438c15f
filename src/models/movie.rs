use serde::{Deserialize, Serialize};

/// Prefix for full-size TMDb poster images
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub released_on: String,
    pub total_votes: u64,
    pub average_votes: f64,
    pub popularity: f64,
    /// `None` when the movie has no poster
    pub image_url: Option<String>,
    pub overview: String,
}

/// Full poster URL for a TMDb `poster_path` such as `/abc.jpg`
#[must_use]
pub fn poster_url(poster_path: Option<&str>) -> Option<String> {
    poster_path
        .filter(|p| !p.is_empty())
        .map(|p| format!("{POSTER_BASE_URL}{p}"))
}
