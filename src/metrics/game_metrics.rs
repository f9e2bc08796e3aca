use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// Session statistics shown next to the board
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub games_played: u32,
    pub bonuses_eaten: u32,
    pub bonuses_missed: u32,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            games_played: 0,
            bonuses_eaten: 0,
            bonuses_missed: 0,
            running: false,
        }
    }

    /// Refresh the game clock; it stands still between games
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    pub fn on_tick(&mut self, outcome: &TickOutcome) {
        match outcome {
            TickOutcome::AteBonus => self.bonuses_eaten += 1,
            TickOutcome::BonusExpired => self.bonuses_missed += 1,
            TickOutcome::GameOver { .. } | TickOutcome::BoardFilled { .. } => self.on_game_over(),
            _ => {}
        }
    }

    pub fn on_game_over(&mut self) {
        self.update();
        self.running = false;
        self.games_played += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CollisionType;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_tick_tracking() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();

        metrics.on_tick(&TickOutcome::Moved);
        metrics.on_tick(&TickOutcome::AteBonus);
        metrics.on_tick(&TickOutcome::BonusExpired);
        assert_eq!(metrics.bonuses_eaten, 1);
        assert_eq!(metrics.bonuses_missed, 1);
        assert_eq!(metrics.games_played, 0);

        metrics.on_tick(&TickOutcome::GameOver {
            collision: CollisionType::Wall,
            final_score: 3,
        });
        assert_eq!(metrics.games_played, 1);
    }

    #[test]
    fn test_clock_stops_after_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        metrics.on_game_over();
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
