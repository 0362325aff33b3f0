use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoardOrientation {
    Normal,  // White at bottom
    Rotated, // Black at bottom
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SquareShade {
    Light,
    Dark,
}

// Position of a cell in the board container. Row 0 is the top row of the unrotated board,
// i.e. rank 8. Cells are never reordered: rotation for black is purely a visual transform,
// so the mapping to `Coord` does not depend on `BoardOrientation`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DisplayCoord {
    row: u8,
    col: u8,
}


impl BoardOrientation {
    pub fn for_force(force: Force) -> Self {
        match force {
            Force::White => BoardOrientation::Normal,
            Force::Black => BoardOrientation::Rotated,
        }
    }

    pub fn css_transform(self) -> &'static str {
        match self {
            BoardOrientation::Normal => "rotate(0deg)",
            BoardOrientation::Rotated => "rotate(180deg)",
        }
    }
}

impl SquareShade {
    pub fn css_class(self) -> &'static str {
        match self {
            SquareShade::Light => "white",
            SquareShade::Dark => "black",
        }
    }
}

impl DisplayCoord {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < NUM_ROWS && col < NUM_COLS).then_some(DisplayCoord { row, col })
    }

    // Row-major, matching the order cells are appended to the container.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_ROWS).flat_map(|row| (0..NUM_COLS).map(move |col| DisplayCoord { row, col }))
    }

    pub fn index(self) -> usize { self.row as usize * NUM_COLS as usize + self.col as usize }

    pub fn shade(self) -> SquareShade {
        if (self.row + self.col) % 2 == 0 { SquareShade::Light } else { SquareShade::Dark }
    }

    pub fn to_coord(self) -> Coord {
        // Both are in range by construction.
        let row = Row::from_zero_based(NUM_ROWS - self.row - 1);
        let col = Col::from_zero_based(self.col);
        match (row, col) {
            (Some(row), Some(col)) => Coord::new(row, col),
            _ => unreachable!("{}", crate::internal_error_message!("bad display coord {:?}", self)),
        }
    }

    pub fn from_coord(coord: Coord) -> Self {
        DisplayCoord {
            row: NUM_ROWS - coord.row.to_zero_based() - 1,
            col: coord.col.to_zero_based(),
        }
    }

    // Value of the `data-pos` attribute, e.g. "7-4".
    pub fn to_dom_pos(self) -> String { format!("{}-{}", self.row, self.col) }

    pub fn from_dom_pos(s: &str) -> Option<Self> {
        let (row, col) = s.split_once('-')?;
        Self::new(row.parse().ok()?, col.parse().ok()?)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_mapping() {
        let e1 = DisplayCoord::new(7, 4).unwrap();
        assert_eq!(e1.to_coord().to_algebraic(), "e1");
        let a8 = DisplayCoord::new(0, 0).unwrap();
        assert_eq!(a8.to_coord().to_algebraic(), "a8");
        let h1 = DisplayCoord::new(7, 7).unwrap();
        assert_eq!(h1.to_coord().to_algebraic(), "h1");
    }

    #[test]
    fn coord_roundtrip() {
        for pos in DisplayCoord::all() {
            assert_eq!(DisplayCoord::from_coord(pos.to_coord()), pos);
        }
    }

    #[test]
    fn dom_pos() {
        let pos = DisplayCoord::new(3, 5).unwrap();
        assert_eq!(pos.to_dom_pos(), "3-5");
        assert_eq!(DisplayCoord::from_dom_pos("3-5"), Some(pos));
        assert_eq!(DisplayCoord::from_dom_pos("8-0"), None);
        assert_eq!(DisplayCoord::from_dom_pos("35"), None);
        assert_eq!(DisplayCoord::from_dom_pos(""), None);
    }

    #[test]
    fn out_of_range_cells_are_rejected() {
        assert_eq!(DisplayCoord::new(8, 0), None);
        assert_eq!(DisplayCoord::new(0, 8), None);
        assert_eq!(DisplayCoord::new(9, 0), None);
        assert_eq!(DisplayCoord::from_dom_pos("9-0"), None);
        let pos = DisplayCoord::new(7, 7).unwrap();
        assert_eq!(pos.to_dom_pos(), "7-7");
        assert_eq!(pos.index(), 63);
        assert!(DisplayCoord::all().all(|pos| pos.index() < 64));
    }

    #[test]
    fn neighbours_never_share_shade() {
        for pos in DisplayCoord::all() {
            if let Some(right) = DisplayCoord::new(pos.row, pos.col + 1) {
                assert_ne!(pos.shade(), right.shade());
            }
            if let Some(below) = DisplayCoord::new(pos.row + 1, pos.col) {
                assert_ne!(pos.shade(), below.shade());
            }
        }
    }
}
