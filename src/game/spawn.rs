//! Placement of food, bonus food and obstacles on free cells.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::ops::Range;

use super::config::{Difficulty, GameConfig};
use super::state::{Position, Snake};

/// Pick a random cell in `xs × ys` for which `blocked` is false.
///
/// Rejection sampling is tried first. After `4 × area` misses the remaining free
/// cells are enumerated and one is chosen uniformly, so the call always
/// terminates. Returns `None` only when every cell in the region is blocked.
pub fn pick_free_cell<R, F>(
    rng: &mut R,
    xs: Range<i32>,
    ys: Range<i32>,
    blocked: F,
) -> Option<Position>
where
    R: Rng + ?Sized,
    F: Fn(Position) -> bool,
{
    if xs.is_empty() || ys.is_empty() {
        return None;
    }

    let area = (xs.len() * ys.len()).max(1);
    for _ in 0..area.saturating_mul(4) {
        let pos = Position::new(rng.gen_range(xs.clone()), rng.gen_range(ys.clone()));
        if !blocked(pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = ys
        .flat_map(|y| xs.clone().map(move |x| Position::new(x, y)))
        .filter(|&pos| !blocked(pos))
        .collect();
    free.choose(rng).copied()
}

/// Place `count` obstacles at random interior cells (one cell away from every
/// edge), avoiding the snake and each other.
pub fn random_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    snake: &Snake,
    count: usize,
) -> HashSet<Position> {
    let mut obstacles = HashSet::with_capacity(count);
    let xs = 1..config.grid_width as i32 - 1;
    let ys = 1..config.grid_height as i32 - 1;

    for _ in 0..count {
        let pick = pick_free_cell(rng, xs.clone(), ys.clone(), |pos| {
            snake.occupies(pos) || obstacles.contains(&pos)
        });
        match pick {
            Some(pos) => {
                obstacles.insert(pos);
            }
            None => break,
        }
    }

    obstacles
}

/// Striped maze: every 4th column on rows 2, 5, 8, ..., keeping a 2-cell border clear.
/// Depends only on the grid size.
pub fn maze_obstacles(width: usize, height: usize) -> Vec<Position> {
    let (width, height) = (width as i32, height as i32);
    (2..height - 2)
        .step_by(3)
        .flat_map(|y| {
            (2..width - 2)
                .filter(|x| x % 4 == 0)
                .map(move |x| Position::new(x, y))
        })
        .collect()
}

/// Obstacle layout for a difficulty. The result never overlaps the snake.
pub fn generate_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    difficulty: Difficulty,
    snake: &Snake,
) -> HashSet<Position> {
    match difficulty {
        Difficulty::Easy => HashSet::new(),
        Difficulty::Normal => random_obstacles(rng, config, snake, config.random_obstacles),
        Difficulty::Hard => maze_obstacles(config.grid_width, config.grid_height)
            .into_iter()
            .filter(|&pos| !snake.occupies(pos))
            .collect(),
    }
}
