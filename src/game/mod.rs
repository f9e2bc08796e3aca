//! Core game logic module for Snake
//!
//! This module contains the simulation without any I/O or rendering
//! dependencies. A front-end drives it through three narrow entry points:
//! [`GameEngine::start`], [`SimulationState::set_intent`] and
//! [`GameEngine::advance`], and reads everything else from the state.

pub mod action;
pub mod config;
pub mod engine;
pub mod spawn;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{ConfigError, Difficulty, GameConfig};
pub use engine::{GameEngine, TickOutcome, TickReport};
pub use state::{Bonus, CollisionType, Phase, Position, SimulationState, Snake};
