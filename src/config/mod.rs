pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::board::{DEFAULT_HEIGHT, DEFAULT_SQUARE_WIDTH, DEFAULT_WIDTH};
use crate::tile::Theme;

// Smallest board a 4x4 piece can spawn on
pub const MIN_BOARD_SIDE: usize = 4;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 250;
pub const DEFAULT_IDLE_DECORATION_MS: u64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board: BoardConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    // Pixel size of a cell for graphical front-ends
    pub square_width: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            square_width: DEFAULT_SQUARE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tick_interval_ms: u64,
    pub theme: usize,
    // Fixed seed for reproducible piece sequences
    pub seed: Option<u64>,
    pub idle_decoration_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            theme: 0,
            seed: None,
            idle_decoration_ms: DEFAULT_IDLE_DECORATION_MS,
        }
    }
}

impl Config {
    /// Copy with every value pulled into a playable range.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        config.board.width = config.board.width.max(MIN_BOARD_SIDE);
        config.board.height = config.board.height.max(MIN_BOARD_SIDE);
        config.board.square_width = config.board.square_width.max(1);
        config.game.tick_interval_ms = config.game.tick_interval_ms.max(1);
        config.game.idle_decoration_ms = config.game.idle_decoration_ms.max(1);
        if Theme::from_index(config.game.theme).is_none() {
            config.game.theme = Theme::default().index();
        }
        config
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.game.tick_interval_ms)
    }

    #[must_use]
    pub fn idle_decoration_interval(&self) -> Duration {
        Duration::from_millis(self.game.idle_decoration_ms)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_index(self.game.theme).unwrap_or_default()
    }
}
