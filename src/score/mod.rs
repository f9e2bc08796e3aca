//! High-score persistence
//!
//! The high score is a single integer stored as plain text. A missing or
//! unreadable file means "no high score yet". Last writer wins.

pub mod scoreboard;
pub mod store;

pub use scoreboard::Scoreboard;
pub use store::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore, ScoreError};
