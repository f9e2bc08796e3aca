use log::{error, info};

use super::store::HighScoreStore;

/// Tracks the best score across games and persists improvements
pub struct Scoreboard<S: HighScoreStore> {
    store: S,
    high_score: u32,
}

impl<S: HighScoreStore> Scoreboard<S> {
    /// Load the stored high score once, at construction
    pub fn new(store: S) -> Self {
        let high_score = store.load_high_score();
        Self { store, high_score }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a finished game. The high score changes, and is saved, only when
    /// `final_score` is strictly greater. Returns whether it changed.
    pub fn record(&mut self, final_score: u32) -> bool {
        if final_score <= self.high_score {
            return false;
        }

        info!("new high score {} (was {})", final_score, self.high_score);
        self.high_score = final_score;

        if let Err(err) = self.store.save_high_score(final_score) {
            error!("failed to save high score: {}", err);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{FileHighScoreStore, MemoryHighScoreStore};
    use tempfile::TempDir;

    #[test]
    fn test_loads_on_creation() {
        let board = Scoreboard::new(MemoryHighScoreStore::with_score(12));
        assert_eq!(board.high_score(), 12);
    }

    #[test]
    fn test_only_strictly_greater_updates() {
        let mut board = Scoreboard::new(MemoryHighScoreStore::with_score(10));

        assert!(!board.record(5));
        assert!(!board.record(10));
        assert_eq!(board.store().saves, 0);

        assert!(board.record(11));
        assert_eq!(board.high_score(), 11);
        assert_eq!(board.store().score, Some(11));
        assert_eq!(board.store().saves, 1);
    }

    #[test]
    fn test_zero_score_never_saved() {
        let mut board = Scoreboard::new(MemoryHighScoreStore::default());
        assert!(!board.record(0));
        assert_eq!(board.store().saves, 0);
    }

    #[test]
    fn test_persists_across_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("highscore.txt");

        let mut first = Scoreboard::new(FileHighScoreStore::new(&path));
        assert_eq!(first.high_score(), 0);
        first.record(23);

        let second = Scoreboard::new(FileHighScoreStore::new(&path));
        assert_eq!(second.high_score(), 23);
    }

    #[test]
    fn test_save_failure_keeps_in_memory_score() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be written as a file
        let mut board = Scoreboard::new(FileHighScoreStore::new(temp_dir.path()));

        assert!(board.record(7));
        assert_eq!(board.high_score(), 7);
    }
}
