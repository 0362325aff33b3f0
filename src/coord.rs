use std::fmt;

use itertools::Itertools;


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


// Rank, from white's point of view. Zero-based: row 0 is rank '1'.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8,
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Option<Self> {
        if idx < NUM_ROWS { Some(Self { idx }) } else { None }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('1' as u32)?;
        Self::from_zero_based(u8::try_from(idx).ok()?)
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_ROWS).map(|idx| Self { idx }) }
}


// File. Zero-based: col 0 is file 'a'.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8,
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Option<Self> {
        if idx < NUM_COLS { Some(Self { idx }) } else { None }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('a' as u32)?;
        Self::from_zero_based(u8::try_from(idx).ok()?)
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_COLS).map(|idx| Self { idx }) }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (file, rank) = s.chars().collect_tuple()?;
        Some(Coord {
            row: Row::from_algebraic(rank)?,
            col: Col::from_algebraic(file)?,
        })
    }

    // Parses the square at the start of a longer notation, e.g. "e8" in "e8q".
    pub fn from_algebraic_prefix(s: &str) -> Option<Self> {
        let prefix: String = s.chars().take(2).collect();
        Self::from_algebraic(&prefix)
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self.to_algebraic())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_algebraic()) }
}

// Move notation understood by the server: origin and destination squares concatenated,
// e.g. "e2e4". Promotions and castling are resolved on the server side.
pub fn move_notation(from: Coord, to: Coord) -> String {
    format!("{}{}", from.to_algebraic(), to.to_algebraic())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_roundtrip() {
        for coord in Coord::all() {
            assert_eq!(Coord::from_algebraic(&coord.to_algebraic()), Some(coord));
        }
    }

    #[test]
    fn algebraic_rejects_garbage() {
        assert_eq!(Coord::from_algebraic(""), None);
        assert_eq!(Coord::from_algebraic("e"), None);
        assert_eq!(Coord::from_algebraic("e9"), None);
        assert_eq!(Coord::from_algebraic("i1"), None);
        assert_eq!(Coord::from_algebraic("E1"), None);
        assert_eq!(Coord::from_algebraic("e10"), None);
    }

    #[test]
    fn algebraic_prefix_drops_promotion() {
        let e8 = Coord::from_algebraic("e8").unwrap();
        assert_eq!(Coord::from_algebraic_prefix("e8q"), Some(e8));
        assert_eq!(Coord::from_algebraic_prefix("e8"), Some(e8));
        assert_eq!(Coord::from_algebraic_prefix("x"), None);
    }

    #[test]
    fn notation() {
        let e2 = Coord::from_algebraic("e2").unwrap();
        let e4 = Coord::from_algebraic("e4").unwrap();
        assert_eq!(move_notation(e2, e4), "e2e4");
    }
}
