#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board dimensions are small enough to fit in i32
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

//! Session controller: owns the board, the falling piece and the lookahead
//! piece, and turns ticks and key presses into board mutations.
//!
//! The controller never schedules anything itself. The front-end calls
//! [`Game::on_tick`] every [`Game::tick_interval`] and forwards input through
//! [`Game::on_input`], both from the same thread.

use std::time::Duration;

use log::{debug, info, trace};

use crate::board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::config::{Config, DEFAULT_TICK_INTERVAL_MS};
use crate::input::Input;
use crate::piece::{PIECE_SIZE, Piece};
use crate::tile::Theme;

// Random pieces dropped onto the board per idle repaint
pub const IDLE_DECORATION_PIECES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No session; the board only shows decoration.
    #[default]
    Idle,
    Running,
    /// Timer halted, board and pieces kept.
    Paused,
}

/// What a tick did, for the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub repaint: bool,
    pub rows_compacted: bool,
    pub locked: bool,
    /// The promoted piece collided at spawn and the session started over.
    pub restarted: bool,
}

#[derive(Debug)]
pub struct Game {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    state: GameState,
    tick_interval: Duration,
    rng: fastrand::Rng,
}

impl Game {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, fastrand::Rng::new())
    }

    /// Same as [`Game::new`] with a fixed random seed.
    #[must_use]
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, fastrand::Rng::with_seed(seed))
    }

    #[must_use]
    pub fn with_rng(width: usize, height: usize, rng: fastrand::Rng) -> Self {
        Self {
            board: Board::new(width, height),
            current: None,
            next: None,
            state: GameState::Idle,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            rng,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let config = config.sanitized();
        let rng = config
            .game
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        let mut game = Self::with_rng(config.board.width, config.board.height, rng);
        game.board.set_square_width(config.board.square_width);
        game.board.set_theme(config.theme());
        game.tick_interval = config.tick_interval();
        game
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// True while the tick driver should be firing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// True while a game exists, running or paused.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.state != GameState::Idle
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval.max(Duration::from_millis(1));
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.board.theme()
    }

    /// Returns false and keeps the current theme for an unknown index.
    pub fn set_theme_index(&mut self, index: usize) -> bool {
        match Theme::from_index(index) {
            Some(theme) => {
                self.board.set_theme(theme);
                true
            }
            None => false,
        }
    }

    pub fn set_square_width(&mut self, square_width: u16) {
        self.board.set_square_width(square_width);
    }

    /// Rebuilds an empty board and drops any running session.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.board = self.board.resized(width, height);
        self.current = None;
        self.next = None;
        self.state = GameState::Idle;
        info!("Board resized to {width}x{height}");
    }

    /// Column new pieces spawn in.
    #[must_use]
    pub fn spawn_column(&self) -> i32 {
        (self.board.width() as i32 - PIECE_SIZE as i32) / 2
    }

    pub fn new_game(&mut self) {
        self.board.clear();
        let x = self.spawn_column();
        self.current = Some(Piece::at(&mut self.rng, x, 0));
        self.next = Some(Piece::at(&mut self.rng, x, 0));
        self.state = GameState::Running;
        info!("New game on a {}x{} board", self.board.width(), self.board.height());
    }

    /// Resumes a paused game. With no game yet, starts one.
    pub fn start(&mut self) {
        match self.state {
            GameState::Idle => self.new_game(),
            GameState::Paused => {
                self.state = GameState::Running;
                info!("Game resumed");
            }
            GameState::Running => {}
        }
    }

    pub fn stop(&mut self) {
        if self.state == GameState::Running {
            self.state = GameState::Paused;
            info!("Game paused");
        }
    }

    /// The start/stop button.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// One gravity step.
    pub fn on_tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.is_running() {
            return outcome;
        }

        outcome.rows_compacted = self.board.compact_full_rows();

        if let Some(current) = self.current {
            let fallen = current.moved(0, 1);
            if self.board.collides(&fallen) {
                outcome.locked = true;
                outcome.restarted = self.advance_piece();
            } else {
                self.current = Some(fallen);
            }
        }

        outcome.repaint = true;
        outcome
    }

    /// Applies a player command. Returns true if the screen needs a repaint.
    pub fn on_input(&mut self, input: Input) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        let candidate = match input {
            Input::Left => current.moved(-1, 0),
            Input::Right => current.moved(1, 0),
            Input::Down => current.moved(0, 1),
            Input::Rotate => current.rotate(),
            Input::HardDrop => {
                self.hard_drop();
                return true;
            }
        };

        if self.board.collides(&candidate) {
            trace!("Rejected {input:?}");
        } else {
            self.current = Some(candidate);
        }
        true
    }

    fn hard_drop(&mut self) {
        let Some(mut current) = self.current else {
            return;
        };
        let mut distance = 0;
        loop {
            let fallen = current.moved(0, 1);
            if self.board.collides(&fallen) {
                break;
            }
            current = fallen;
            distance += 1;
        }
        self.current = Some(current);
        debug!("Hard drop of {distance} rows");

        self.advance_piece();
        self.board.compact_full_rows();
    }

    /// Locks the current piece and promotes the next one. Returns true if the
    /// promoted piece collided at spawn and the session restarted.
    fn advance_piece(&mut self) -> bool {
        if let Some(current) = self.current.take() {
            self.board.merge(&current);
            debug!("Locked piece at ({}, {})", current.x(), current.y());
        }

        self.current = self.next.take();
        if self.current.is_some_and(|piece| self.board.collides(&piece)) {
            info!("Stack reached the spawn point, restarting");
            self.new_game();
            return true;
        }

        let x = self.spawn_column();
        self.next = Some(Piece::at(&mut self.rng, x, 0));
        false
    }

    /// Refreshes the idle screen with random pieces. Does nothing once a game
    /// has been started.
    pub fn decorate_idle(&mut self) {
        if self.state != GameState::Idle {
            return;
        }
        self.board.scatter(&mut self.rng, IDLE_DECORATION_PIECES);
        self.next = Some(Piece::new(&mut self.rng));
    }

    /// Places pieces directly, for scripted scenarios.
    #[cfg(test)]
    pub(crate) fn set_pieces(&mut self, current: Option<Piece>, next: Option<Piece>) {
        self.current = current;
        self.next = next;
    }

    /// Mutable access to the grid, for scripted scenarios.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
