#![warn(clippy::all, clippy::pedantic)]

pub mod game_tests;

pub mod test_utils {
    use crate::board::Board;
    use crate::tile::Tile;

    // Fill every cell of row `y` except the listed columns
    pub fn fill_row_except(board: &mut Board, y: i32, gaps: &[i32]) {
        for x in 0..board.width() as i32 {
            if !gaps.contains(&x) {
                board.set(x, y, Tile::Red);
            }
        }
    }

    #[must_use]
    pub fn filled_cells(board: &Board) -> usize {
        board
            .rows()
            .iter()
            .flatten()
            .filter(|tile| tile.is_filled())
            .count()
    }
}
