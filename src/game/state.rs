use std::collections::HashSet;

use super::action::Direction;
use super::config::Difficulty;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction of the last completed move
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction.
    /// Extra segments trail behind the head.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.opposite().delta();
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(dx, dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Whether any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend a new head; drop the tail unless growing
    pub fn push_head(&mut self, head: Position, grow: bool) {
        self.body.insert(0, head);
        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never happens while a game is running)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Time-limited, higher-value food
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bonus {
    pub position: Position,
    /// Ticks left before the bonus disappears
    pub remaining: u32,
}

/// Two-state lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Idle, waiting for the player to start
    #[default]
    Start,
    /// Timer-driven ticks are being applied
    Running,
}

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// Snake hit an obstacle
    Obstacle,
}

impl CollisionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::SelfCollision => "self",
            Self::Obstacle => "obstacle",
        }
    }
}

/// Complete state of one game. Everything a renderer needs is readable from here.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub grid_width: usize,
    pub grid_height: usize,
    pub difficulty: Difficulty,
    pub phase: Phase,
    pub snake: Snake,
    /// Direction adopted at the start of the next tick
    pub intent: Direction,
    pub obstacles: HashSet<Position>,
    pub food: Position,
    pub bonus: Option<Bonus>,
    /// Lifetime a fresh bonus starts with, kept for the countdown fraction
    pub bonus_lifetime: u32,
    pub score: u32,
    pub foods_eaten: u32,
    pub ticks: u32,
    /// Cause of the last game over, if the game ended on a collision
    pub collision: Option<CollisionType>,
}

impl SimulationState {
    /// Create a running state with a free-standing snake and food
    pub fn new(
        snake: Snake,
        food: Position,
        grid_width: usize,
        grid_height: usize,
        bonus_lifetime: u32,
    ) -> Self {
        let intent = snake.direction;
        Self {
            grid_width,
            grid_height,
            difficulty: Difficulty::Easy,
            phase: Phase::Running,
            snake,
            intent,
            obstacles: HashSet::new(),
            food,
            bonus: None,
            bonus_lifetime,
            score: 0,
            foods_eaten: 0,
            ticks: 0,
            collision: None,
        }
    }

    /// Record the direction for the next tick. Reversals of the current
    /// direction of travel, and intents outside a running game, are ignored.
    /// Returns whether the intent was accepted.
    pub fn set_intent(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Running || self.snake.direction.is_opposite(direction) {
            return false;
        }
        self.intent = direction;
        true
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    /// Cells a new food or bonus must not land on
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.is_occupied_by_snake(pos) || self.is_obstacle(pos)
    }

    pub fn bonus_position(&self) -> Option<Position> {
        self.bonus.map(|bonus| bonus.position)
    }

    /// Remaining share of the bonus countdown in `[0, 1]`, if a bonus is active
    pub fn bonus_fraction(&self) -> Option<f64> {
        self.bonus.map(|bonus| {
            if self.bonus_lifetime == 0 {
                0.0
            } else {
                (bonus.remaining as f64 / self.bonus_lifetime as f64).clamp(0.0, 1.0)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_state() -> SimulationState {
        SimulationState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(8, 8),
            20,
            20,
            50,
        )
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.tail(), Position::new(3, 5));

        let single = Snake::new(Position::new(1, 1), Direction::Up, 0);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_push_head() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.push_head(Position::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.tail(), Position::new(4, 5));

        snake.push_head(Position::new(7, 5), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Position::new(4, 5));
    }

    #[test]
    fn test_bounds_checking() {
        let state = running_state();

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_set_intent_rejects_reversal() {
        let mut state = running_state();

        assert!(!state.set_intent(Direction::Left));
        assert_eq!(state.intent, Direction::Right);

        assert!(state.set_intent(Direction::Up));
        assert_eq!(state.intent, Direction::Up);

        // Checked against the direction of travel, not the pending intent
        assert!(state.set_intent(Direction::Down));
        assert_eq!(state.intent, Direction::Down);
    }

    #[test]
    fn test_set_intent_ignored_when_idle() {
        let mut state = running_state();
        state.phase = Phase::Start;
        assert!(!state.set_intent(Direction::Up));
        assert_eq!(state.intent, Direction::Right);
    }

    #[test]
    fn test_blocked_cells() {
        let mut state = running_state();
        state.obstacles.insert(Position::new(10, 10));

        assert!(state.is_blocked(Position::new(4, 5)));
        assert!(state.is_blocked(Position::new(10, 10)));
        assert!(!state.is_blocked(Position::new(8, 8)));
    }

    #[test]
    fn test_bonus_fraction() {
        let mut state = running_state();
        assert_eq!(state.bonus_fraction(), None);

        state.bonus = Some(Bonus {
            position: Position::new(1, 1),
            remaining: 25,
        });
        assert_eq!(state.bonus_fraction(), Some(0.5));
        assert_eq!(state.bonus_position(), Some(Position::new(1, 1)));
    }
}
