use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::Args;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Default number of gameplay ticks per second.
pub const DEFAULT_TICK_RATE_HZ: u32 = 10;

/// Upper bound accepted for the tick rate.
pub const MAX_TICK_RATE_HZ: u32 = 1000;

/// Default starting snake length.
pub const DEFAULT_INITIAL_LENGTH: u16 = 3;

/// Score granted per food eaten.
pub const DEFAULT_GROWTH_REWARD: u32 = 1;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the cell closest to the middle of the grid.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Named gameplay options. Every field falls back to its default when
/// omitted from a config file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub tick_rate_hz: u32,
    pub initial_length: u16,
    pub initial_direction: Direction,
    pub growth_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            initial_length: DEFAULT_INITIAL_LENGTH,
            initial_direction: Direction::Right,
            growth_reward: DEFAULT_GROWTH_REWARD,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that a game can actually be started with these options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        if self.tick_rate_hz == 0 || self.tick_rate_hz > MAX_TICK_RATE_HZ {
            return Err(ConfigError::TickRate {
                value: self.tick_rate_hz,
                max: MAX_TICK_RATE_HZ,
            });
        }

        if self.initial_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }

        let grid = self.grid();
        let snake = self.initial_snake();
        if !snake.segments().all(|segment| segment.is_within_bounds(grid)) {
            return Err(ConfigError::InitialSnakeOutOfBounds {
                length: self.initial_length,
                width: self.width,
                height: self.height,
            });
        }

        if snake.len() >= grid.total_cells() {
            return Err(ConfigError::NoRoomForFood {
                width: self.width,
                height: self.height,
            });
        }

        // Every free cell can be eaten once; the total must fit the score.
        let meals = (grid.total_cells() - snake.len()) as u128;
        if u128::from(self.growth_reward) * meals > u128::from(u32::MAX) {
            return Err(ConfigError::RewardOverflow {
                reward: self.growth_reward,
                max: u32::MAX,
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    /// Layers an optional JSON file and then command-line overrides on top
    /// of the defaults, and validates the result.
    pub fn resolve(
        file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Straight starting snake with its head on the grid center.
    #[must_use]
    pub fn initial_snake(&self) -> Snake {
        Snake::new(
            self.grid().center(),
            self.initial_direction,
            usize::from(self.initial_length),
        )
    }

    /// Wall-clock time between two ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}

/// Per-option command-line overrides; unset flags keep the file or default value.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<u16>,

    /// Ticks per second.
    #[arg(long)]
    pub tick_rate: Option<u32>,

    /// Starting snake length.
    #[arg(long)]
    pub initial_length: Option<u16>,

    /// Starting direction: up, down, left or right.
    #[arg(long)]
    pub initial_direction: Option<Direction>,

    /// Score granted per food.
    #[arg(long)]
    pub growth_reward: Option<u32>,
}

impl ConfigOverrides {
    /// Writes every set override into `config`.
    pub fn apply(&self, config: &mut GameConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate_hz = tick_rate;
        }
        if let Some(length) = self.initial_length {
            config.initial_length = length;
        }
        if let Some(direction) = self.initial_direction {
            config.initial_direction = direction;
        }
        if let Some(reward) = self.growth_reward {
            config.growth_reward = reward;
        }
    }
}

/// Colors used by the terminal renderer.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub text: Color,
    pub alert: Color,
    pub muted: Color,
}

/// Green snake and red food on black.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Rgb(0, 255, 0),
    snake_body: Color::Rgb(0, 200, 0),
    food: Color::Rgb(255, 0, 0),
    play_bg: Color::Black,
    border_fg: Color::White,
    text: Color::White,
    alert: Color::Rgb(255, 0, 0),
    muted: Color::DarkGray,
};

/// Glyph for one grid cell; each cell spans two terminal columns.
pub const GLYPH_CELL: &str = "██";

/// Terminal columns per logical cell.
pub const CELL_COLUMNS: u16 = 2;
