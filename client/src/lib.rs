//! # Scoreboard Client Library
//!
//! Client-side access to the scoreboard server: reporting a player's score
//! for a team and reading a team's leaderboard.
//!
//! ## Module Organization
//!
//! ### Network Module (`network`)
//! [`network::ScoreClient`] wraps one `reqwest` client and knows the two
//! server routes. Responses come back as the server renders them, plain text.
//!
//! ### Watch Module (`watch`)
//! [`watch::LeaderboardWatcher`] tracks the last leaderboard seen so a polling
//! loop only prints when something changed.
//!
//! ### Error Module (`error`)
//! Transport failures and server rejections.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use client::network::ScoreClient;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScoreClient::new("127.0.0.1:8080", Duration::from_secs(5))?;
//!
//!     print!("{}", client.report("red", "alice", 42).await?);
//!     print!("{}", client.leaderboard("red").await?);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod network;
pub mod watch;
