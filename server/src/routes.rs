//! HTTP routes translating query strings into scoreboard calls

use crate::error::{ApiError, ApiResult};
use crate::scoreboard::Scoreboard;
use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use log::info;
use shared::{
    render_leaderboard, render_update, CountQuery, LeaderboardQuery, Score, COUNT_PATH,
    LEADERBOARD_PATH,
};
use std::sync::Arc;

/// Decoded query string in arrival order, repeated keys included
type QueryPairs = Vec<(String, String)>;

/// Builds the router serving both endpoints from `scoreboard`
pub fn router(scoreboard: Arc<Scoreboard>) -> Router {
    Router::new()
        .route(COUNT_PATH, get(record_count))
        .route(LEADERBOARD_PATH, get(leaderboard))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(scoreboard)
}

/// Logs every request URI before routing, so rejected and unknown
/// requests show up too
async fn log_request(request: Request, next: Next) -> Response {
    info!("{}", request.uri());
    next.run(request).await
}

/// `GET /count?team=&name=&count=`
///
/// Parameters are checked before the scoreboard is touched, in the order
/// count, name, team. A repeated key keeps its first value.
async fn record_count(
    State(scoreboard): State<Arc<Scoreboard>>,
    Query(pairs): Query<QueryPairs>,
) -> ApiResult<String> {
    let query = CountQuery::from_pairs(&pairs);

    let count = parse_count(query.count.as_deref())?;
    let name = required(query.name.as_deref(), "name")?;
    let team = required(query.team.as_deref(), "team")?;

    let update = scoreboard.record_score(team, name, count);
    Ok(render_update(name, update.previous_or_zero(), update.current))
}

/// `GET /?team=`
async fn leaderboard(
    State(scoreboard): State<Arc<Scoreboard>>,
    Query(pairs): Query<QueryPairs>,
) -> ApiResult<String> {
    let query = LeaderboardQuery::from_pairs(&pairs);

    let team = required(query.team.as_deref(), "team")?;
    Ok(render_leaderboard(&scoreboard.ranked_leaderboard(team)))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found\n")
}

fn parse_count(raw: Option<&str>) -> ApiResult<Score> {
    let raw = raw.ok_or(ApiError::MissingParameter("count"))?;
    raw.parse::<Score>().map_err(|e| ApiError::InvalidCount(format!("{:?}: {}", raw, e)))
}

fn required<'a>(value: Option<&'a str>, param: &'static str) -> ApiResult<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::MissingParameter(param)),
    }
}
