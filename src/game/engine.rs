use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::Direction,
    config::{ConfigError, Difficulty, GameConfig},
    spawn::{generate_obstacles, pick_free_cell},
    state::{Bonus, CollisionType, Phase, Position, SimulationState, Snake},
};
use crate::audio::SoundCue;

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed
    Idle,
    /// The snake moved one cell without eating
    Moved,
    /// Ordinary food was eaten
    AteFood { bonus_spawned: bool },
    /// Bonus food was eaten
    AteBonus,
    /// The snake moved and the uncollected bonus ran out on this tick
    BonusExpired,
    /// The snake collided; the game is back in the start phase
    GameOver {
        collision: CollisionType,
        final_score: u32,
    },
    /// No free cell was left for new food; the game is back in the start phase
    BoardFilled { final_score: u32 },
}

/// Result of a game tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    /// Sound events produced by this tick, in order
    pub cues: Vec<SoundCue>,
}

impl TickReport {
    fn new(outcome: TickOutcome) -> Self {
        Self {
            outcome,
            cues: Vec::new(),
        }
    }

    /// Final score if this tick ended the game
    pub fn final_score(&self) -> Option<u32> {
        match self.outcome {
            TickOutcome::GameOver { final_score, .. } | TickOutcome::BoardFilled { final_score } => {
                Some(final_score)
            }
            _ => None,
        }
    }

    pub fn ended_game(&self) -> bool {
        self.final_score().is_some()
    }
}

/// The game engine that handles all game logic.
///
/// The engine owns only the configuration and the random source; the game
/// itself lives in a [`SimulationState`] passed to each transition.
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create an engine seeded from the operating system
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose random placements are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing placements from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Begin a new game: single-cell snake at the grid center heading right,
    /// score zero, obstacles for `difficulty`, fresh food.
    pub fn start(&mut self, difficulty: Difficulty) -> SimulationState {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center, Direction::Right, 1);
        let obstacles = generate_obstacles(&mut self.rng, &self.config, difficulty, &snake);

        let mut state = SimulationState::new(
            snake,
            center,
            self.config.grid_width,
            self.config.grid_height,
            self.config.bonus_lifetime,
        );
        state.difficulty = difficulty;
        state.obstacles = obstacles;
        // Validated configs always leave room next to the snake and obstacles.
        state.food = self
            .free_cell(&state, None)
            .unwrap_or(Position::new(0, 0));

        debug!(
            "started {} game on {}x{} with {} obstacles, food at {:?}",
            difficulty,
            state.grid_width,
            state.grid_height,
            state.obstacles.len(),
            state.food
        );

        state
    }

    /// Execute one tick of the game
    pub fn advance(&mut self, state: &mut SimulationState) -> TickReport {
        if !state.is_running() {
            return TickReport::new(TickOutcome::Idle);
        }

        state.ticks += 1;

        let direction = state.intent;
        let new_head = state.snake.head().moved_in_direction(direction);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.phase = Phase::Start;
            state.collision = Some(collision);
            debug!("collision ({}) at {:?}", collision.as_str(), new_head);

            let mut report = TickReport::new(TickOutcome::GameOver {
                collision,
                final_score: state.score,
            });
            report.cues.push(SoundCue::GameOver);
            return report;
        }

        state.snake.direction = direction;

        let ate_food = new_head == state.food;
        let ate_bonus = !ate_food && state.bonus_position() == Some(new_head);
        state.snake.push_head(new_head, ate_food || ate_bonus);

        let mut report = TickReport::new(TickOutcome::Moved);

        if ate_food {
            state.score += self.config.food_score;
            state.foods_eaten += 1;
            report.cues.push(SoundCue::FoodEaten);

            let mut bonus_spawned = false;
            if state.foods_eaten % self.config.bonus_every == 0 {
                if let Some(position) = self.free_cell(state, None) {
                    state.bonus = Some(Bonus {
                        position,
                        remaining: self.config.bonus_lifetime,
                    });
                    bonus_spawned = true;
                    debug!("bonus spawned at {:?}", position);
                }
            }

            match self.free_cell(state, state.bonus_position()) {
                Some(food) => state.food = food,
                None => {
                    state.phase = Phase::Start;
                    state.bonus = None;
                    report.outcome = TickOutcome::BoardFilled {
                        final_score: state.score,
                    };
                    report.cues.push(SoundCue::GameOver);
                    return report;
                }
            }

            report.outcome = TickOutcome::AteFood { bonus_spawned };
        } else if ate_bonus {
            state.score += self.config.bonus_score;
            state.bonus = None;
            report.outcome = TickOutcome::AteBonus;
            report.cues.push(SoundCue::BonusEaten);
        }

        if let Some(bonus) = state.bonus.as_mut() {
            bonus.remaining = bonus.remaining.saturating_sub(1);
            if bonus.remaining == 0 {
                state.bonus = None;
                if report.outcome == TickOutcome::Moved {
                    report.outcome = TickOutcome::BonusExpired;
                }
            }
        }

        report
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &SimulationState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.is_occupied_by_snake(pos) {
            return Some(CollisionType::SelfCollision);
        }

        if state.is_obstacle(pos) {
            return Some(CollisionType::Obstacle);
        }

        None
    }

    /// Random cell clear of the snake, obstacles and `avoid`
    fn free_cell(&mut self, state: &SimulationState, avoid: Option<Position>) -> Option<Position> {
        pick_free_cell(
            &mut self.rng,
            0..state.grid_width as i32,
            0..state.grid_height as i32,
            |pos| state.is_blocked(pos) || Some(pos) == avoid,
        )
    }
}
