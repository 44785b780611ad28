//! Change detection for polled leaderboards

/// Remembers the last leaderboard seen and reports only changes
#[derive(Debug, Default)]
pub struct LeaderboardWatcher {
    last: Option<String>,
}

impl LeaderboardWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `board` and returns it if it differs from the previous poll.
    /// The first poll always counts as a change, even for an empty board.
    pub fn observe(&mut self, board: String) -> Option<&str> {
        if self.last.as_deref() == Some(board.as_str()) {
            return None;
        }

        self.last = Some(board);
        self.last.as_deref()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_is_change() {
        let mut watcher = LeaderboardWatcher::new();
        assert_eq!(watcher.last(), None);
        assert_eq!(watcher.observe(String::new()), Some(""));
    }

    #[test]
    fn test_unchanged_board_is_suppressed() {
        let mut watcher = LeaderboardWatcher::new();
        let board = "alice               10\n".to_string();

        assert!(watcher.observe(board.clone()).is_some());
        assert!(watcher.observe(board.clone()).is_none());
        assert_eq!(watcher.last(), Some(board.as_str()));
    }

    #[test]
    fn test_changed_board_is_reported() {
        let mut watcher = LeaderboardWatcher::new();
        watcher.observe("alice               10\n".to_string());

        let changed = "bob                 20\nalice               10\n";
        assert_eq!(watcher.observe(changed.to_string()), Some(changed));
        assert_eq!(watcher.last(), Some(changed));
    }
}
