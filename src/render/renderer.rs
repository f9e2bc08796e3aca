use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use crate::game::{CollisionType, Difficulty, Position, SimulationState};
use crate::metrics::GameMetrics;

/// Outcome of the previous game, shown on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastResult {
    pub score: u32,
    /// `None` when the board was filled
    pub collision: Option<CollisionType>,
    pub new_high_score: bool,
}

/// Everything drawn around the board
pub struct Hud<'a> {
    pub high_score: u32,
    pub selected: Difficulty,
    pub metrics: &'a GameMetrics,
    pub last_result: Option<LastResult>,
}

/// What occupies a grid cell, in drawing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Obstacle,
    Food,
    Bonus,
    Empty,
}

impl CellKind {
    pub fn of(state: &SimulationState, pos: Position) -> CellKind {
        if pos == state.snake.head() {
            CellKind::Head
        } else if state.snake.occupies(pos) {
            CellKind::Body
        } else if state.is_obstacle(pos) {
            CellKind::Obstacle
        } else if pos == state.food {
            CellKind::Food
        } else if state.bonus_position() == Some(pos) {
            CellKind::Bonus
        } else {
            CellKind::Empty
        }
    }

    fn span(&self) -> Span<'static> {
        match self {
            CellKind::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
            CellKind::Obstacle => Span::styled("▓▓", Style::default().fg(Color::Red)),
            CellKind::Food => Span::styled(
                "● ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            CellKind::Bonus => Span::styled(
                "★ ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: Option<&SimulationState>, hud: &Hud) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Bonus countdown
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let running = state.filter(|s| s.is_running());

        let stats = self.render_stats(running, hud);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match running {
            Some(state) => {
                frame.render_widget(self.render_grid(state), game_area);
                if let Some(gauge) = self.render_bonus_gauge(state) {
                    frame.render_widget(gauge, self.gauge_area(chunks[2], state));
                }
            }
            None => frame.render_widget(self.render_start_screen(hud), game_area),
        }

        let controls = self.render_controls(running.is_some());
        frame.render_widget(controls, chunks[3]);
    }

    fn render_grid(&self, state: &SimulationState) -> Paragraph<'static> {
        let lines: Vec<Line> = (0..state.grid_height as i32)
            .map(|y| {
                let spans: Vec<Span> = (0..state.grid_width as i32)
                    .map(|x| CellKind::of(state, Position::new(x, y)).span())
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" Snake - {} ", state.difficulty)),
            )
            .alignment(Alignment::Center)
    }

    /// Same width as the board, centered
    fn gauge_area(&self, row: Rect, state: &SimulationState) -> Rect {
        let width = u16::try_from(state.grid_width * 2 + 2)
            .unwrap_or(u16::MAX)
            .min(row.width);
        Rect {
            x: row.x + (row.width - width) / 2,
            width,
            ..row
        }
    }

    fn render_bonus_gauge(&self, state: &SimulationState) -> Option<Gauge<'static>> {
        let fraction = state.bonus_fraction()?;
        let remaining = state.bonus.map(|b| b.remaining).unwrap_or(0);

        Some(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Yellow).bg(Color::Black))
                .ratio(fraction)
                .label(format!("bonus {remaining}")),
        )
    }

    fn render_stats(&self, state: Option<&SimulationState>, hud: &Hud) -> Paragraph<'static> {
        let score = state.map(|s| s.score).unwrap_or(0);
        let difficulty = state.map(|s| s.difficulty).unwrap_or(hud.selected);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Level: ", Style::default().fg(Color::Yellow)),
            Span::styled(difficulty.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_screen(&self, hud: &Hud) -> Paragraph<'static> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "S N A K E",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(last) = hud.last_result {
            let cause = match last.collision {
                Some(collision) => format!("Game Over! ({})", collision.as_str()),
                None => "Board cleared!".to_string(),
            };
            text.push(Line::from(Span::styled(
                cause,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            text.push(Line::from(vec![
                Span::styled("Your Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    last.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            if last.new_high_score {
                text.push(Line::from(Span::styled(
                    "New high score!",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            text.push(Line::from(""));
        }

        let mut selector = vec![Span::styled("Difficulty: ", Style::default().fg(Color::Gray))];
        for difficulty in Difficulty::ALL {
            let style = if difficulty == hud.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            selector.push(Span::styled(format!(" {} ", difficulty), style));
            selector.push(Span::raw(" "));
        }
        text.push(Line::from(selector));
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to start or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
    }

    fn render_controls(&self, running: bool) -> Paragraph<'static> {
        let line = if running {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        } else {
            Line::from(vec![
                Span::styled("←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("1 2 3", Style::default().fg(Color::Cyan)),
                Span::raw(" to pick difficulty | "),
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" to start"),
            ])
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
