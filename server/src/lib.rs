//! # Scoreboard Server Library
//!
//! This library provides the HTTP service that tracks the latest score of every
//! player, grouped by team, and serves ranked leaderboards to any client.
//!
//! ## Core Responsibilities
//!
//! ### Score Tracking
//! Clients report a player's current score for a team. The server keeps only
//! the most recent value per player; a new report replaces the previous one and
//! the response tells the client what the score was before.
//!
//! ### Leaderboards
//! Any client can ask for a team's leaderboard. Players are ranked by score,
//! highest first, with ties ordered by name so the output is reproducible.
//! Teams that have never been reported read as an empty leaderboard.
//!
//! ## Architecture Design
//!
//! ### Explicitly Owned State
//! All scores live in one [`scoreboard::Scoreboard`] created at startup and
//! handed to the request handlers through an `Arc`. Nothing is stored in
//! globals, and nothing survives a restart.
//!
//! ### Concurrent Request Handling
//! Requests run in parallel on the tokio worker threads. The scoreboard guards
//! its map with a read-write lock: reports take the write lock for the whole
//! create-team-and-insert step, leaderboard reads copy a team under the read
//! lock and sort the copy after releasing it.
//!
//! ## Module Organization
//!
//! ### Scoreboard Module (`scoreboard`)
//! The in-memory store and its two operations, record and rank.
//!
//! ### Routes Module (`routes`)
//! Query-string extraction and validation, and the plain-text responses.
//!
//! ### Error Module (`error`)
//! Request rejections and their HTTP status codes.
//!
//! ### Network Module (`network`)
//! Socket binding and the serve loop with graceful shutdown.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::network::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = Server::new("0.0.0.0:8080").await?;
//!
//!     // Serve `/count` and `/` until Ctrl+C, then drain in-flight requests
//!     server
//!         .run_until(async {
//!             let _ = tokio::signal::ctrl_c().await;
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints
//!
//! - `GET /count?team=<T>&name=<N>&count=<C>` records `C` as the score of
//!   `N` in `T` and answers `updated count for N from <previous> to C`.
//! - `GET /?team=<T>` answers one line per player, the name padded to 20
//!   columns followed by the score.
//!
//! Malformed or missing parameters are answered with `400 Bad Request` and a
//! one-line plain-text reason; the scoreboard is left untouched.

pub mod error;
pub mod network;
pub mod routes;
pub mod scoreboard;
