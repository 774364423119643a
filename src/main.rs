use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{FoodPolicy, GameConfig};
use grid_snake::logging;
use grid_snake::menu::{FileSource, MenuConfig};
use grid_snake::modes::{MenuMode, PlayMode};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a block-aligned board")]
struct Cli {
    /// What to run
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// JSON game configuration; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in board units
    #[arg(long)]
    width: Option<i32>,

    /// Board height in board units
    #[arg(long)]
    height: Option<i32>,

    /// Cell size in board units
    #[arg(long)]
    block_size: Option<i32>,

    /// Milliseconds per simulation tick
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Let food respawn on top of the snake
    #[arg(long)]
    allow_food_overlap: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Captured catalog response to list in menu mode
    #[arg(long, default_value = "catalog.json")]
    menu_file: PathBuf,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Play,
    /// Print the food catalog
    Menu,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(block_size) = self.block_size {
            config.block_size = block_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.allow_food_overlap {
            config.food_policy = FoodPolicy::AllowOverlap;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logger(path, logging::level_from_verbosity(cli.verbose))?;
    }

    match cli.mode {
        Mode::Play => {
            let config = cli.game_config()?;
            info!("starting play mode with {config:?}");
            let mut play_mode = PlayMode::new(&config);
            play_mode.run().await?;
        }
        Mode::Menu => {
            let menu_mode = MenuMode::new(MenuConfig::default(), FileSource::new(&cli.menu_file));
            menu_mode.run(&mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
