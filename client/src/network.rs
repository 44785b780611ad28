//! HTTP client for the scoreboard server

use crate::error::{ClientError, ClientResult};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use shared::{CountQuery, LeaderboardQuery, Score, COUNT_PATH, LEADERBOARD_PATH};
use std::time::Duration;

#[derive(Clone)]
pub struct ScoreClient {
    client: Client,
    base_url: String,
}

impl ScoreClient {
    /// Creates a client for `server`, given as `host:port` or a full URL
    pub fn new(server: &str, timeout: Duration) -> ClientResult<Self> {
        let base_url = normalize_base_url(server)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reports `score` for `name` in `team` and returns the server's update line
    pub async fn report(&self, team: &str, name: &str, score: Score) -> ClientResult<String> {
        self.get(COUNT_PATH, &CountQuery::new(team, name, score)).await
    }

    /// Fetches the rendered leaderboard of `team`
    pub async fn leaderboard(&self, team: &str) -> ClientResult<String> {
        self.get(LEADERBOARD_PATH, &LeaderboardQuery::new(team)).await
    }

    async fn get<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> ClientResult<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(ClientError::Rejected {
                status: status.as_u16(),
                body: body.trim_end().to_string(),
            })
        }
    }
}

/// Turns `host:port` or `scheme://host:port/` into a base URL without a
/// trailing slash, defaulting the scheme to `http`
pub fn normalize_base_url(server: &str) -> ClientResult<String> {
    let server = server.trim().trim_end_matches('/');
    if server.is_empty() {
        return Err(ClientError::InvalidServer(server.to_string()));
    }

    if server.contains("://") {
        Ok(server.to_string())
    } else {
        Ok(format!("http://{}", server))
    }
}
