// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use rookmeo_chess::coord::Coord;
use rookmeo_chess::display::DisplayCoord;


#[allow(dead_code)]
pub fn square(algebraic: &str) -> Coord {
    Coord::from_algebraic(algebraic).unwrap_or_else(|| panic!("bad square: {algebraic}"))
}

// The cell a user would click to hit `algebraic`.
#[allow(dead_code)]
pub fn cell(algebraic: &str) -> DisplayCoord { DisplayCoord::from_coord(square(algebraic)) }

#[allow(dead_code)]
pub fn cell_at(row: u8, col: u8) -> DisplayCoord {
    DisplayCoord::new(row, col).unwrap_or_else(|| panic!("bad cell: {row}-{col}"))
}

// Number of columns a placement row spans: pieces plus digit runs.
#[allow(dead_code)]
pub fn row_width(row_notation: &str) -> u32 {
    row_notation.chars().map(|ch| ch.to_digit(10).unwrap_or(1)).sum()
}

#[macro_export]
macro_rules! piece {
    ($force:ident $kind:ident) => {
        rookmeo_chess::piece::PieceOnBoard {
            force: rookmeo_chess::force::Force::$force,
            kind: rookmeo_chess::piece::PieceKind::$kind,
        }
    };
}
