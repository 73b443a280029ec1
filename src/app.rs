#![warn(clippy::all, clippy::pedantic)]

use log::{debug, info};

use crate::config::Config;
use crate::game::Game;
use crate::input::Command;
use crate::piece::Piece;
use crate::tile::Tile;

pub type AppResult<T> = anyhow::Result<T>;

/// Front-end state: the engine plus what the terminal loop needs around it.
pub struct App {
    pub game: Game,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let config = config.sanitized();
        let mut game = Game::from_config(&config);
        game.decorate_idle();
        Self {
            game,
            config,
            should_quit: false,
        }
    }

    /// Handles one command from the keyboard. Returns true if the screen
    /// should be redrawn.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Game(input) => self.game.on_input(input),
            Command::StartStop => {
                self.game.toggle();
                true
            }
            // The theme picker is locked while pieces are falling
            Command::Theme(index) => {
                if self.game.is_running() {
                    debug!("Theme change ignored while running");
                    return false;
                }
                let changed = self.game.set_theme_index(index);
                if changed {
                    info!("Theme set to {}", self.game.theme().name());
                }
                changed
            }
            Command::Quit => {
                self.should_quit = true;
                false
            }
        }
    }

    pub fn on_tick(&mut self) -> bool {
        self.game.on_tick().repaint
    }

    pub fn on_idle(&mut self) -> bool {
        if self.game.has_session() {
            return false;
        }
        self.game.decorate_idle();
        true
    }

    /// Label for the start/stop control.
    #[must_use]
    pub fn start_stop_label(&self) -> &'static str {
        if self.game.is_running() { "Stop" } else { "Start" }
    }

    /// Board cells with the falling piece drawn over them, row by row.
    #[must_use]
    pub fn get_render_rows(&self) -> Vec<Vec<Tile>> {
        let board = self.game.board();
        let mut rows = board.rows();

        if let Some(piece) = self.game.current_piece() {
            overlay(&mut rows, piece);
        }

        rows
    }
}

fn overlay(rows: &mut [Vec<Tile>], piece: &Piece) {
    for (x, y, tile) in piece.board_cells() {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            continue;
        };
        if let Some(cell) = rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = tile;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
