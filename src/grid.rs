use std::{fmt, ops};

use enum_map::EnumMap;
use ndarray::{Array, Array2};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::force::Force;
use crate::piece::{PieceOnBoard, piece_to_ascii};


#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    data: Array2<Option<PieceOnBoard>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Coord, PieceOnBoard)> + '_ {
        Coord::all().filter_map(|coord| self[coord].map(|piece| (coord, piece)))
    }

    pub fn num_pieces_by_force(&self) -> EnumMap<Force, usize> {
        let mut counts = EnumMap::default();
        for (_, piece) in self.pieces() {
            counts[piece.force] += 1;
        }
        counts
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<PieceOnBoard>;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output { &mut self.data[coord_to_index(pos)] }
}

fn coord_to_index(pos: Coord) -> [usize; 2] {
    [pos.row.to_zero_based() as usize, pos.col.to_zero_based() as usize]
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.pieces().map(|(coord, piece)| (coord.to_algebraic(), piece_to_ascii(piece))))
            .finish()
    }
}
