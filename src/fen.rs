// Only the piece placement field of FEN is understood. The server owns the rest of the game
// state (side to move, castling rights, clocks) and we never need to read it.

use crate::coord::{Col, Coord, NUM_ROWS, Row};
use crate::grid::Grid;
use crate::piece::piece_from_ascii;


// Returns the piece placement field: the first space-separated token of a FEN string.
pub fn placement_field(game_state: &str) -> &str {
    game_state.split(' ').next().unwrap_or_default()
}

// Decodes piece placement best-effort. The encoding is trusted rather than validated:
//   - a digit skips that many columns;
//   - any other character occupies one column, unknown letters leave the square empty;
//   - squares that fall outside the board are dropped.
pub fn placement_from_game_state(game_state: &str) -> Grid {
    let mut grid = Grid::new();
    for (row_idx, row_notation) in placement_field(game_state).split('/').enumerate() {
        let mut col_idx: usize = 0;
        for ch in row_notation.chars() {
            if let Some(empty_run) = ch.to_digit(10) {
                col_idx += empty_run as usize;
                continue;
            }
            let row = display_row_to_row(row_idx);
            let col = u8::try_from(col_idx).ok().and_then(Col::from_zero_based);
            match (row, col) {
                (Some(row), Some(col)) => grid[Coord::new(row, col)] = piece_from_ascii(ch),
                _ => log::trace!("Square {row_idx}-{col_idx} is off the board, dropping {ch:?}"),
            }
            col_idx += 1;
        }
    }
    grid
}

// FEN lists rows top to bottom, i.e. starting from rank 8.
fn display_row_to_row(row_idx: usize) -> Option<Row> {
    let row_idx = u8::try_from(row_idx).ok().filter(|&idx| idx < NUM_ROWS)?;
    Row::from_zero_based(NUM_ROWS - row_idx - 1)
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::force::Force;
    use crate::piece::{PieceKind, PieceOnBoard};

    const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    fn at(grid: &Grid, square: &str) -> Option<PieceOnBoard> {
        grid[Coord::from_algebraic(square).unwrap()]
    }

    fn total_pieces(grid: &Grid) -> usize { grid.num_pieces_by_force().values().sum() }

    #[test]
    fn starting_position() {
        let grid = placement_from_game_state(&format!("{STARTING_POSITION} w KQkq - 0 1"));
        assert_eq!(grid.num_pieces_by_force()[Force::White], 16);
        assert_eq!(grid.num_pieces_by_force()[Force::Black], 16);
        assert_eq!(at(&grid, "e1"), Some(PieceOnBoard::new(PieceKind::King, Force::White)));
        assert_eq!(at(&grid, "d8"), Some(PieceOnBoard::new(PieceKind::Queen, Force::Black)));
        assert_eq!(at(&grid, "e4"), None);
        assert_eq!(at(&grid, "a2"), Some(PieceOnBoard::new(PieceKind::Pawn, Force::White)));
        assert_eq!(at(&grid, "h7"), Some(PieceOnBoard::new(PieceKind::Pawn, Force::Black)));
    }

    #[test]
    fn ignores_everything_after_placement() {
        assert_eq!(placement_field("8/8/8/8/8/8/8/8 b - - 3 40"), "8/8/8/8/8/8/8/8");
        assert_eq!(placement_field(""), "");
        assert_eq!(total_pieces(&placement_from_game_state("")), 0);
    }

    #[test]
    fn unknown_letters_take_a_column() {
        let grid = placement_from_game_state("xK6/8/8/8/8/8/8/8");
        assert_eq!(at(&grid, "a8"), None);
        assert_eq!(at(&grid, "b8"), Some(PieceOnBoard::new(PieceKind::King, Force::White)));
        assert_eq!(total_pieces(&grid), 1);
    }

    #[test]
    fn off_board_squares_are_dropped() {
        // Nine columns on the first row, nine rows in total.
        let grid = placement_from_game_state("8k/8/8/8/8/8/8/8/K7");
        assert_eq!(total_pieces(&grid), 0);
    }
}
