// What the board container shows: one cell per square, each with an optional glyph and a
// highlight flag. The web client mirrors this model into DOM elements after every change.

use itertools::Itertools;

use crate::coord::Coord;
use crate::display::{DisplayCoord, SquareShade};
use crate::fen::placement_from_game_state;
use crate::force::Force;
use crate::piece::PieceOnBoard;


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Cell {
    pub pos: DisplayCoord,
    pub shade: SquareShade,
    pub piece: Option<PieceOnBoard>,
    pub highlighted: bool,
}

#[derive(Clone, Debug)]
pub struct BoardView {
    cells: Vec<Cell>,
}

impl Cell {
    pub fn glyph(&self) -> Option<char> { self.piece.map(|p| p.to_pictogram()) }
}

impl BoardView {
    // Cells are created once, in row-major order, and then only mutated.
    pub fn create() -> Self {
        let cells = DisplayCoord::all()
            .map(|pos| Cell {
                pos,
                shade: pos.shade(),
                piece: None,
                highlighted: false,
            })
            .collect_vec();
        BoardView { cells }
    }

    pub fn cells(&self) -> &[Cell] { &self.cells }
    pub fn cell(&self, pos: DisplayCoord) -> &Cell { &self.cells[pos.index()] }
    pub fn piece_at(&self, pos: DisplayCoord) -> Option<PieceOnBoard> { self.cell(pos).piece }
    pub fn is_highlighted(&self, pos: DisplayCoord) -> bool { self.cell(pos).highlighted }

    pub fn highlighted(&self) -> impl Iterator<Item = DisplayCoord> + '_ {
        self.cells.iter().filter(|cell| cell.highlighted).map(|cell| cell.pos)
    }

    // Accepts a full FEN; everything after the placement field is ignored.
    pub fn render_from_game_state(&mut self, game_state: &str) {
        for cell in self.cells.iter_mut() {
            cell.piece = None;
            cell.highlighted = false;
        }
        let grid = placement_from_game_state(game_state);
        let counts = grid.num_pieces_by_force();
        log::debug!(
            "Rendering {} white and {} black pieces",
            counts[Force::White],
            counts[Force::Black]
        );
        for (coord, piece) in grid.pieces() {
            self.cells[DisplayCoord::from_coord(coord).index()].piece = Some(piece);
        }
    }

    pub fn set_highlights(&mut self, coords: impl IntoIterator<Item = Coord>) {
        self.clear_highlights();
        for coord in coords {
            self.cells[DisplayCoord::from_coord(coord).index()].highlighted = true;
        }
    }

    pub fn clear_highlights(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.highlighted = false;
        }
    }
}
