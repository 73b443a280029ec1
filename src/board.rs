#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board dimensions are small enough to fit in i32
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    // Coordinates are checked to be non-negative before casting
    clippy::cast_sign_loss
)]

use log::debug;

use crate::piece::Piece;
use crate::tile::{Theme, Tile};

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 30;
pub const DEFAULT_SQUARE_WIDTH: u16 = 16;

/// The grid of locked cells, indexed `cells[x][y]` with `y` growing downwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    square_width: u16,
    theme: Theme,
    cells: Vec<Vec<Tile>>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            square_width: DEFAULT_SQUARE_WIDTH,
            theme: Theme::default(),
            cells: vec![vec![Tile::Empty; height]; width],
        }
    }

    /// A fresh empty grid with new dimensions. Scale and theme carry over.
    #[must_use]
    pub fn resized(&self, width: usize, height: usize) -> Self {
        Self {
            square_width: self.square_width,
            theme: self.theme,
            ..Self::new(width, height)
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn square_width(&self) -> u16 {
        self.square_width
    }

    pub fn set_square_width(&mut self, square_width: u16) {
        self.square_width = square_width;
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Cell at `(x, y)`, `None` when off the board.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.in_bounds(x, y)
            .then(|| self.cells[x as usize][y as usize])
    }

    /// Returns false if `(x, y)` is off the board.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.cells[x as usize][y as usize] = tile;
        true
    }

    /// Row `y` from left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a row of the board.
    #[must_use]
    pub fn row(&self, y: usize) -> Vec<Tile> {
        self.cells.iter().map(|column| column[y]).collect()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        (0..self.height).map(|y| self.row(y)).collect()
    }

    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.cells.iter().all(|column| column[y].is_filled())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|tile| tile.is_empty())
    }

    /// True if any occupied cell of `piece` is left of column 0, right of the
    /// last column, below the last row, or over an occupied board cell.
    ///
    /// There is no check against the top edge: cells above row 0 never collide.
    #[must_use]
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.board_cells().any(|(x, y, _)| {
            if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
                return true;
            }
            y >= 0 && self.cells[x as usize][y as usize].is_filled()
        })
    }

    /// Writes the piece into the grid. Target coordinates are clamped to the
    /// last column/row and occupied cells are never overwritten.
    pub fn merge(&mut self, piece: &Piece) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for (x, y, tile) in piece.board_cells() {
            if x < 0 || y < 0 {
                continue;
            }
            let x = (x as usize).min(self.width - 1);
            let y = (y as usize).min(self.height - 1);
            if self.cells[x][y].is_empty() {
                self.cells[x][y] = tile;
            }
        }
    }

    pub fn clear(&mut self) {
        for column in &mut self.cells {
            column.fill(Tile::Empty);
        }
    }

    /// Removes full rows, sliding the rows above down by one.
    ///
    /// Rows are scanned from 1 to the bottom; row 0 is never examined. Each
    /// full row `j` is overwritten by shifting rows `j-1 ..= 1` down, so row 1
    /// keeps its contents and is duplicated into row 2.
    ///
    /// Returns true if any row was removed.
    pub fn compact_full_rows(&mut self) -> bool {
        let mut removed = false;
        for j in 1..self.height {
            if !self.is_row_full(j) {
                continue;
            }
            for k in (2..=j).rev() {
                for column in &mut self.cells {
                    column[k] = column[k - 1];
                }
            }
            debug!("Compacted full row {j}");
            removed = true;
        }
        removed
    }

    /// Drops `count` random pieces at random anchors. Purely decorative.
    pub fn scatter(&mut self, rng: &mut fastrand::Rng, count: usize) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for _ in 0..count {
            let x = rng.usize(0..self.width) as i32;
            let y = rng.usize(0..self.height) as i32;
            let piece = Piece::at(rng, x, y);
            self.merge(&piece);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
