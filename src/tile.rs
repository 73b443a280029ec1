#![warn(clippy::all, clippy::pedantic)]

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Cyan,
}

impl Tile {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    #[must_use]
    pub fn is_filled(self) -> bool {
        self != Tile::Empty
    }
}

/// Cosmetic tile style. Only the renderer looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Solid,
    Emboss,
    Glass,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Solid, Theme::Emboss, Theme::Glass];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Theme::Solid => 0,
            Theme::Emboss => 1,
            Theme::Glass => 2,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Solid => "Solid",
            Theme::Emboss => "Emboss",
            Theme::Glass => "Glass",
        }
    }
}
