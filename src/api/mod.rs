use std::{collections::HashMap, sync::Arc};

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};

use crate::{
    error::GatewayError,
    models::{Business, Event, Location, Movie, Trail, Weather},
    providers::{darksky, google_geocode, hiking_project, meetup, tmdb, yelp},
    upstream::UpstreamClient,
};

pub mod query;

pub use query::RouteQuery;

/// Shared, read-only handler state
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

type Params = Query<HashMap<String, String>>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/location", get(get_location))
        .route("/weather", get(get_weather))
        .route("/movies", get(get_movies))
        .route("/yelp", get(get_yelp))
        .route("/trails", get(get_trails))
        .route("/meetups", get(get_meetups))
        .with_state(state)
}

async fn get_location(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Location>, GatewayError> {
    let query = RouteQuery::from(params);
    let location = google_geocode::search_to_lat_long(&state.upstream, query.data()?).await?;
    Ok(Json(location))
}

async fn get_weather(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Vec<Weather>>, GatewayError> {
    let at = RouteQuery::from(params).coordinates()?;
    Ok(Json(darksky::get_weather(&state.upstream, at).await?))
}

async fn get_movies(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Vec<Movie>>, GatewayError> {
    let query = RouteQuery::from(params);
    let search = query.data_field("search_query")?;
    Ok(Json(tmdb::get_movies(&state.upstream, search).await?))
}

async fn get_yelp(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Vec<Business>>, GatewayError> {
    let at = RouteQuery::from(params).coordinates()?;
    Ok(Json(yelp::get_yelp(&state.upstream, at).await?))
}

async fn get_trails(
    State(state): State<AppState>,
    Query(params): Params,
) -> Result<Json<Vec<Trail>>, GatewayError> {
    let at = RouteQuery::from(params).coordinates()?;
    Ok(Json(hiking_project::get_trails(&state.upstream, at).await?))
}

/// Inbound parameters are ignored; the topic is fixed.
async fn get_meetups(State(state): State<AppState>) -> Result<Json<Vec<Event>>, GatewayError> {
    Ok(Json(meetup::get_meetups(&state.upstream).await?))
}
