#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Local grid indices are always in 0..4, so casting to i32 is lossless
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use crate::tile::Tile;

/// Side length of the local grid every piece lives in.
pub const PIECE_SIZE: usize = 4;

pub type Cells = [[Tile; PIECE_SIZE]; PIECE_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Tower,
    Hook,
    Square,
    RightLean,
    Knight,
    Pyramid,
    LeftLean,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::Tower,
        Shape::Hook,
        Shape::Square,
        Shape::RightLean,
        Shape::Knight,
        Shape::Pyramid,
        Shape::LeftLean,
    ];

    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(0..Self::ALL.len())]
    }

    #[must_use]
    pub fn tile(self) -> Tile {
        match self {
            Shape::Tower => Tile::Red,
            Shape::Hook => Tile::Cyan,
            Shape::Square => Tile::Blue,
            Shape::RightLean => Tile::Green,
            Shape::Knight => Tile::Purple,
            Shape::Pyramid => Tile::Orange,
            Shape::LeftLean => Tile::Yellow,
        }
    }

    /// Occupied `(column, row)` cells of the spawn layout.
    #[must_use]
    pub fn layout(self) -> [(usize, usize); 4] {
        match self {
            Shape::Tower => [(1, 0), (1, 1), (1, 2), (1, 3)],
            Shape::Hook => [(1, 1), (2, 1), (2, 2), (2, 3)],
            Shape::Square => [(1, 1), (1, 2), (2, 1), (2, 2)],
            Shape::RightLean => [(2, 1), (1, 1), (1, 2), (0, 2)],
            Shape::Knight => [(2, 1), (1, 1), (1, 2), (1, 3)],
            Shape::Pyramid => [(1, 1), (0, 2), (1, 2), (2, 2)],
            Shape::LeftLean => [(0, 1), (1, 1), (1, 2), (2, 2)],
        }
    }
}

/// A falling piece: a 4x4 local grid anchored at `(x, y)` on the board.
///
/// Pieces are values. [`Piece::rotate`] and [`Piece::moved`] hand back a new
/// piece and leave the receiver alone, so a candidate placement can be tested
/// against the board before it replaces the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    cells: Cells,
    x: i32,
    y: i32,
}

impl Piece {
    /// A random shape anchored at the origin.
    #[must_use]
    pub fn new(rng: &mut fastrand::Rng) -> Self {
        Self::at(rng, 0, 0)
    }

    #[must_use]
    pub fn at(rng: &mut fastrand::Rng, x: i32, y: i32) -> Self {
        Self::with_shape(Shape::random(rng), x, y)
    }

    #[must_use]
    pub fn with_shape(shape: Shape, x: i32, y: i32) -> Self {
        let mut cells = [[Tile::Empty; PIECE_SIZE]; PIECE_SIZE];
        for (i, j) in shape.layout() {
            cells[i][j] = shape.tile();
        }
        Self { shape, cells, x, y }
    }

    /// Quarter turn about the corner of the local grid: `new[3 - j][i] = old[i][j]`.
    ///
    /// The pivot is fixed, not the visual centre of the shape, so some shapes
    /// drift inside their box as they turn.
    #[must_use]
    pub fn rotate(&self) -> Self {
        let mut cells = [[Tile::Empty; PIECE_SIZE]; PIECE_SIZE];
        for (i, column) in self.cells.iter().enumerate() {
            for (j, &tile) in column.iter().enumerate() {
                cells[PIECE_SIZE - 1 - j][i] = tile;
            }
        }
        Self { cells, ..*self }
    }

    #[must_use]
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn tile(&self) -> Tile {
        self.shape.tile()
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Local cell at column `i`, row `j`. Out of range reads as empty.
    #[must_use]
    pub fn cell(&self, i: usize, j: usize) -> Tile {
        self.cells
            .get(i)
            .and_then(|column| column.get(j))
            .copied()
            .unwrap_or(Tile::Empty)
    }

    #[must_use]
    pub fn local_cells(&self) -> &Cells {
        &self.cells
    }

    /// Occupied cells as `(local column, local row, tile)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, column)| {
            column
                .iter()
                .enumerate()
                .filter(|(_, tile)| tile.is_filled())
                .map(move |(j, &tile)| (i, j, tile))
        })
    }

    /// Occupied cells translated into board coordinates.
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        self.occupied()
            .map(|(i, j, tile)| (self.x + i as i32, self.y + j as i32, tile))
    }
}
