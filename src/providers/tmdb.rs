//! The Movie Database search API

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::GatewayError;
use crate::models::Movie;
use crate::models::movie::poster_url;
use crate::upstream::{Auth, Upstream, UpstreamClient};

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<MovieResult>,
}

#[derive(Debug, Deserialize)]
pub struct MovieResult {
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub popularity: f64,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
}

impl From<MovieResult> for Movie {
    fn from(movie: MovieResult) -> Self {
        Movie {
            image_url: poster_url(movie.poster_path.as_deref()),
            title: movie.title,
            released_on: movie.release_date,
            total_votes: movie.vote_count,
            average_votes: movie.vote_average,
            popularity: movie.popularity,
            overview: movie.overview,
        }
    }
}

#[must_use]
pub fn search_url(base_url: &str, api_key: &str, query: &str) -> String {
    format!(
        "{}/3/search/movie?api_key={}&language=en-US&query={}&page=1&include_adult=false",
        base_url,
        api_key,
        urlencoding::encode(query)
    )
}

/// First page of movies matching `query`
#[instrument(skip(client))]
pub async fn get_movies(client: &UpstreamClient, query: &str) -> Result<Vec<Movie>, GatewayError> {
    let upstream = Upstream::Movies;
    let url = search_url(client.base_url(upstream), client.api_key(upstream)?, query);

    let response: SearchResponse = client.get_json(upstream, &url, Auth::InUrl).await?;
    let movies: Vec<Movie> = response.results.into_iter().map(Movie::from).collect();

    info!("Found {} movies for '{}'", movies.len(), query);
    Ok(movies)
}
