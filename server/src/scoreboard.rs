//! In-memory scoreboard holding the latest score of every player, per team
//!
//! This module owns the only mutable state of the server:
//! - Team registry, created lazily on the first score report for a team
//! - Per-team player scores, where a new report replaces the old value
//! - Ranked reads that snapshot a team and order it for display
//!
//! The whole map sits behind one read-write lock. Writes are short (a hash
//! insert), so a single lock keeps team creation and player updates atomic
//! without per-team bookkeeping.

use log::debug;
use parking_lot::RwLock;
use shared::{PlayerScore, Score};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Outcome of a single score report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    /// Score held before this report, `None` on the player's first report
    pub previous: Option<Score>,
    /// Score stored by this report
    pub current: Score,
}

impl ScoreUpdate {
    /// True if the report overwrote an existing entry
    pub fn was_present(&self) -> bool {
        self.previous.is_some()
    }

    /// Previous score as shown to clients, where a new player starts at zero
    pub fn previous_or_zero(&self) -> Score {
        self.previous.unwrap_or(0)
    }
}

/// Shared registry of team leaderboards
///
/// Handlers receive it through an `Arc` and only ever touch it through
/// `record_score` and `ranked_leaderboard`. Readers never observe a team map
/// while it is being modified.
#[derive(Debug, Default)]
pub struct Scoreboard {
    /// team -> player name -> latest score
    teams: RwLock<HashMap<String, HashMap<String, Score>>>,
}

impl Scoreboard {
    /// Creates an empty scoreboard with no teams
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `score` as the latest score of `name` in `team`
    ///
    /// Creates the team on its first report. The team lookup, creation and
    /// player insert all happen under one write lock, so concurrent first
    /// reporters of a new team end up in the same team map and concurrent
    /// reports for one player serialize with the last one winning.
    pub fn record_score(&self, team: &str, name: &str, score: Score) -> ScoreUpdate {
        let previous = {
            let mut teams = self.teams.write();
            let players = teams.entry(team.to_string()).or_insert_with(|| {
                debug!("Created team {}", team);
                HashMap::new()
            });
            players.insert(name.to_string(), score)
        };

        match previous {
            Some(old) => debug!("Updated {}/{} from {} to {}", team, name, old, score),
            None => debug!("Added {}/{} with {}", team, name, score),
        }

        ScoreUpdate {
            previous,
            current: score,
        }
    }

    /// Returns a ranked snapshot of `team`
    ///
    /// Entries are ordered by score, highest first, and players with equal
    /// scores by name ascending. The returned vector is owned by the caller
    /// and unaffected by later reports. Unknown teams yield an empty vector
    /// and are not created.
    pub fn ranked_leaderboard(&self, team: &str) -> Vec<PlayerScore> {
        let mut entries: Vec<PlayerScore> = {
            let teams = self.teams.read();
            match teams.get(team) {
                Some(players) => players
                    .iter()
                    .map(|(name, score)| PlayerScore::new(name.as_str(), *score))
                    .collect(),
                None => return Vec::new(),
            }
        };

        entries.sort_by(rank_order);
        entries
    }

    /// Number of teams that have received at least one report
    pub fn team_count(&self) -> usize {
        self.teams.read().len()
    }

    /// Number of players recorded for `team`, zero for unknown teams
    pub fn player_count(&self, team: &str) -> usize {
        self.teams.read().get(team).map_or(0, HashMap::len)
    }

    /// Returns true if no score has been reported yet
    pub fn is_empty(&self) -> bool {
        self.teams.read().is_empty()
    }
}

/// Leaderboard ordering: score descending, then name ascending
fn rank_order(a: &PlayerScore, b: &PlayerScore) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn board(entries: &[(&str, Score)]) -> Vec<PlayerScore> {
        entries
            .iter()
            .map(|(name, score)| PlayerScore::new(*name, *score))
            .collect()
    }

    #[test]
    fn test_scoreboard_creation() {
        let scoreboard = Scoreboard::new();
        assert!(scoreboard.is_empty());
        assert_eq!(scoreboard.team_count(), 0);
    }

    #[test]
    fn test_single_report() {
        let scoreboard = Scoreboard::new();

        let update = scoreboard.record_score("red", "alice", 10);
        assert_eq!(update.previous, None);
        assert_eq!(update.current, 10);
        assert!(!update.was_present());
        assert_eq!(update.previous_or_zero(), 0);

        assert_eq!(scoreboard.ranked_leaderboard("red"), board(&[("alice", 10)]));
    }

    #[test]
    fn test_two_players_ranked() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_score("red", "alice", 10);
        scoreboard.record_score("red", "bob", 20);

        assert_eq!(
            scoreboard.ranked_leaderboard("red"),
            board(&[("bob", 20), ("alice", 10)])
        );
    }

    #[test]
    fn test_report_replaces_previous_score() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_score("red", "alice", 10);

        let update = scoreboard.record_score("red", "alice", 5);
        assert_eq!(update.previous, Some(10));
        assert!(update.was_present());
        assert_eq!(update.previous_or_zero(), 10);

        assert_eq!(scoreboard.ranked_leaderboard("red"), board(&[("alice", 5)]));
        assert_eq!(scoreboard.player_count("red"), 1);
    }

    #[test]
    fn test_repeated_report_is_idempotent() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_score("red", "alice", 7);
        scoreboard.record_score("red", "bob", 3);
        let before = scoreboard.ranked_leaderboard("red");

        let update = scoreboard.record_score("red", "alice", 7);
        assert_eq!(update.previous, Some(7));
        assert_eq!(scoreboard.ranked_leaderboard("red"), before);
    }

    #[test]
    fn test_unknown_team_is_empty() {
        let scoreboard = Scoreboard::new();
        assert!(scoreboard.ranked_leaderboard("blue").is_empty());
        assert_eq!(scoreboard.player_count("blue"), 0);
    }

    #[test]
    fn test_read_does_not_create_team() {
        let scoreboard = Scoreboard::new();
        scoreboard.ranked_leaderboard("blue");
        assert!(scoreboard.is_empty());
    }

    #[test]
    fn test_teams_are_independent() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_score("red", "alice", 10);
        scoreboard.record_score("blue", "alice", 99);

        assert_eq!(scoreboard.team_count(), 2);
        assert_eq!(scoreboard.ranked_leaderboard("red"), board(&[("alice", 10)]));
        assert_eq!(scoreboard.ranked_leaderboard("blue"), board(&[("alice", 99)]));
    }

    #[test]
    fn test_negative_and_zero_scores() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_score("red", "a", 0);
        scoreboard.record_score("red", "b", -5);
        scoreboard.record_score("red", "c", Score::MAX);
        scoreboard.record_score("red", "d", Score::MIN);

        assert_eq!(
            scoreboard.ranked_leaderboard("red"),
            board(&[("c", Score::MAX), ("a", 0), ("b", -5), ("d", Score::MIN)])
        );
    }

    #[test]
    fn test_strictly_descending_for_distinct_scores() {
        let scoreboard = Scoreboard::new();
        for i in 0..50 {
            let score = (i * 37) % 101;
            scoreboard.record_score("red", &format!("player{}", i), score);
        }

        let ranked = scoreboard.ranked_leaderboard("red");
        assert_eq!(ranked.len(), 50);
        assert!(ranked.windows(2).all(|w| w[0].score > w[1].score));
    }

    #[test]
    fn test_ties_break_by_name() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_score("red", "carol", 5);
        scoreboard.record_score("red", "alice", 5);
        scoreboard.record_score("red", "bob", 5);
        scoreboard.record_score("red", "dave", 9);

        let expected = board(&[("dave", 9), ("alice", 5), ("bob", 5), ("carol", 5)]);
        for _ in 0..10 {
            assert_eq!(scoreboard.ranked_leaderboard("red"), expected);
        }
    }

    #[test]
    fn test_snapshot_unaffected_by_later_reports() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_score("red", "alice", 10);

        let snapshot = scoreboard.ranked_leaderboard("red");
        scoreboard.record_score("red", "alice", 1);
        scoreboard.record_score("red", "bob", 50);

        assert_eq!(snapshot, board(&[("alice", 10)]));
    }

    #[test]
    fn test_store_accepts_any_strings() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_score("", "", 1);
        assert_eq!(scoreboard.ranked_leaderboard(""), board(&[("", 1)]));
    }

    #[test]
    fn test_concurrent_distinct_players_no_lost_writes() {
        let scoreboard = Arc::new(Scoreboard::new());
        let threads = 8;
        let per_thread = 250;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let scoreboard = Arc::clone(&scoreboard);
                thread::spawn(move || {
                    for i in 0..per_thread {
                        let name = format!("t{}-p{}", t, i);
                        scoreboard.record_score("red", &name, (t * per_thread + i) as Score);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let ranked = scoreboard.ranked_leaderboard("red");
        assert_eq!(ranked.len(), threads * per_thread);
        assert_eq!(scoreboard.player_count("red"), threads * per_thread);
    }

    #[test]
    fn test_concurrent_new_team_creation() {
        let scoreboard = Arc::new(Scoreboard::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let scoreboard = Arc::clone(&scoreboard);
                thread::spawn(move || {
                    scoreboard.record_score("fresh", &format!("p{}", i), i);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(scoreboard.team_count(), 1);
        assert_eq!(scoreboard.player_count("fresh"), 16);
    }

    #[test]
    fn test_concurrent_same_player_keeps_one_value() {
        let scoreboard = Arc::new(Scoreboard::new());
        let values: Vec<Score> = (1..=32).map(|v| v * 1000 + v).collect();

        let handles: Vec<_> = values
            .iter()
            .map(|&value| {
                let scoreboard = Arc::clone(&scoreboard);
                thread::spawn(move || {
                    scoreboard.record_score("red", "alice", value);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let ranked = scoreboard.ranked_leaderboard("red");
        assert_eq!(ranked.len(), 1);
        assert!(values.contains(&ranked[0].score));
    }

    #[test]
    fn test_readers_see_consistent_snapshots() {
        let scoreboard = Arc::new(Scoreboard::new());

        let writer = {
            let scoreboard = Arc::clone(&scoreboard);
            thread::spawn(move || {
                for i in 0..2000 {
                    scoreboard.record_score("red", &format!("p{}", i % 200), i);
                }
            })
        };

        let reader = {
            let scoreboard = Arc::clone(&scoreboard);
            thread::spawn(move || {
                for _ in 0..200 {
                    let ranked = scoreboard.ranked_leaderboard("red");
                    assert!(ranked.len() <= 200);
                    assert!(ranked
                        .windows(2)
                        .all(|w| rank_order(&w[0], &w[1]) != Ordering::Greater));
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(scoreboard.player_count("red"), 200);
    }
}
