use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};

use crate::audio::{SoundCue, SoundSink};
use crate::game::{Difficulty, GameEngine, Phase, SimulationState, TickOutcome, TickReport};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Hud, LastResult, Renderer};
use crate::score::{HighScoreStore, Scoreboard};

pub struct HumanMode<S: HighScoreStore> {
    engine: GameEngine,
    /// `None` until the first game starts
    state: Option<SimulationState>,
    selected: Difficulty,
    scoreboard: Scoreboard<S>,
    sound: Box<dyn SoundSink>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    last_result: Option<LastResult>,
    should_quit: bool,
}

impl<S: HighScoreStore> HumanMode<S> {
    pub fn new(
        engine: GameEngine,
        difficulty: Difficulty,
        scoreboard: Scoreboard<S>,
        sound: Box<dyn SoundSink>,
    ) -> Self {
        Self {
            engine,
            state: None,
            selected: difficulty,
            scoreboard,
            sound,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            last_result: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = tick_timer(self.selected.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                // Game logic tick; the period follows the difficulty of the running game
                _ = tick_timer.tick() => {
                    self.tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| self.render_frame(frame))
                        .context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key, self.phase());
            if self.handle_action(action) {
                *tick_timer = tick_timer_for(self.selected);
            }
        }
    }

    /// Apply a key action. Returns true when a new game was started.
    fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Move(direction) => {
                if let Some(state) = self.state.as_mut() {
                    state.set_intent(direction);
                }
            }
            KeyAction::Start => {
                self.start_game();
                return true;
            }
            KeyAction::Restart => {
                self.abandon_game();
                self.start_game();
                return true;
            }
            KeyAction::SelectDifficulty(difficulty) => self.selected = difficulty,
            KeyAction::NextDifficulty => self.selected = self.selected.next(),
            KeyAction::PreviousDifficulty => self.selected = self.selected.previous(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
        false
    }

    fn phase(&self) -> Phase {
        self.state.as_ref().map(|s| s.phase).unwrap_or_default()
    }

    fn start_game(&mut self) {
        let state = self.engine.start(self.selected);
        info!(
            "game started: {} with {} obstacles",
            state.difficulty,
            state.obstacles.len()
        );
        self.state = Some(state);
        self.last_result = None;
        self.metrics.on_game_start();
        self.sound.play(SoundCue::GameStart);
    }

    /// Advance the running game by one tick, if there is one
    fn tick(&mut self) -> Option<TickReport> {
        let state = self.state.as_mut().filter(|s| s.is_running())?;
        let report = self.engine.advance(state);

        for cue in &report.cues {
            self.sound.play(*cue);
        }
        self.metrics.on_tick(&report.outcome);

        if let Some(final_score) = report.final_score() {
            self.finish_game(&report.outcome, final_score);
        }

        Some(report)
    }

    fn finish_game(&mut self, outcome: &TickOutcome, final_score: u32) {
        let collision = match outcome {
            TickOutcome::GameOver { collision, .. } => {
                info!("game over ({}), score {}", collision.as_str(), final_score);
                Some(*collision)
            }
            _ => {
                info!("board filled, score {}", final_score);
                None
            }
        };

        let new_high_score = self.scoreboard.record(final_score);
        self.last_result = Some(LastResult {
            score: final_score,
            collision,
            new_high_score,
        });
    }

    /// End a running game early. It still counts as played and its score
    /// still competes for the high score.
    fn abandon_game(&mut self) {
        let Some(state) = self.state.as_mut().filter(|s| s.is_running()) else {
            return;
        };
        state.phase = Phase::Start;
        let final_score = state.score;
        info!("game abandoned, score {}", final_score);

        self.metrics.on_game_over();
        self.scoreboard.record(final_score);
    }

    fn render_frame(&self, frame: &mut ratatui::Frame) {
        let hud = Hud {
            high_score: self.scoreboard.high_score(),
            selected: self.selected,
            metrics: &self.metrics,
            last_result: self.last_result,
        };
        self.renderer.render(frame, self.state.as_ref(), &hud);
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn tick_timer_for(difficulty: Difficulty) -> Interval {
    tick_timer(difficulty.tick_interval())
}

/// First tick fires one full period after creation
fn tick_timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
