use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::audio::{Silent, SoundSink, TerminalBell};
use grid_snake::game::{Difficulty, GameConfig, GameEngine};
use grid_snake::modes::HumanMode;
use grid_snake::paths;
use grid_snake::score::{FileHighScoreStore, Scoreboard};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake in the terminal, with obstacles and bonus food")]
struct Cli {
    /// Difficulty selected on the start screen
    #[arg(long, default_value = "easy")]
    difficulty: Difficulty,

    /// Grid width (overrides the config file)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (overrides the config file)
    #[arg(long)]
    height: Option<usize>,

    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// High-score file [default: <data dir>/highscore.txt]
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Seed for reproducible food and obstacle placement
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,

    /// Log file [default: <data dir>/grid_snake.log]
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// The terminal belongs to the UI, so logs go to a file. Without a writable
/// log file the game still runs, just unlogged.
fn init_logging(path: &Path, level: LevelFilter) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(file) = File::create(path) else {
        return;
    };
    let _ = WriteLogger::init(level, Config::default(), file);
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }

    config.validate().context("Invalid game settings")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(paths::default_log_path);
    init_logging(&log_path, cli.log_level.into());
    info!("starting grid_snake {}", env!("CARGO_PKG_VERSION"));

    let config = build_config(&cli)?;
    info!(
        "grid {}x{}, bonus every {} foods for {} ticks",
        config.grid_width, config.grid_height, config.bonus_every, config.bonus_lifetime
    );

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    }
    .context("Failed to create game engine")?;

    let score_path = cli
        .score_file
        .clone()
        .unwrap_or_else(paths::default_high_score_path);
    let scoreboard = Scoreboard::new(FileHighScoreStore::new(score_path));
    info!("high score {}", scoreboard.high_score());

    let sound: Box<dyn SoundSink> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::new())
    };

    let mut human_mode = HumanMode::new(engine, cli.difficulty, scoreboard, sound);
    human_mode.run().await?;

    info!("bye");
    Ok(())
}
