//! Grid Snake - a terminal Snake game
//!
//! This library provides:
//! - Core simulation (game module): movement, collisions, food, bonus food, obstacles
//! - High-score persistence (score module)
//! - Sound cues (audio module)
//! - TUI rendering, input mapping and the interactive loop (render, input, modes)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod paths;
pub mod render;
pub mod score;
