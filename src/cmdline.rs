use std::path::PathBuf;

use clap::Parser;

use crate::snake_game::{ConfigError, GameConfig, GridPoint};

#[derive(Parser, Debug)]
#[command(version, about = "Grid snake: eat, grow, don't crash")]
pub struct Args {
    /// Run without a window and print the outcome.
    #[arg(long)]
    pub sim: bool,

    /// Ticks to simulate in headless mode.
    #[arg(long, default_value_t = 100)]
    pub ticks: usize,

    /// One heading per tick: U, D, L, R, or '.' for no input.
    #[arg(long, default_value = "")]
    pub moves: String,

    /// Print the headless report, playback log included, as JSON.
    #[arg(long)]
    pub json: bool,

    /// JSON game config; flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Screen width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Screen height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long)]
    pub length: Option<usize>,

    /// Milliseconds between ticks in the windowed game.
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// First food cell as COL,ROW.
    #[arg(long, value_parser = parse_point)]
    pub food: Option<GridPoint>,
}

fn parse_point(s: &str) -> Result<GridPoint, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected COL,ROW, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad column '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad row '{y}': {e}"))?;
    Ok(GridPoint::new(x, y))
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed { config.seed = Some(seed); }
        if let Some(width) = self.width { config.screen_width = width; }
        if let Some(height) = self.height { config.screen_height = height; }
        if let Some(length) = self.length { config.initial_snake_length = length; }
        if let Some(tick_ms) = self.tick_ms { config.tick_millis = tick_ms; }
        if let Some(food) = self.food { config.initial_food = Some(food); }
        config.validate()?;
        Ok(config)
    }
}
