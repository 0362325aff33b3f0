use derive_new::new;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct PieceOnBoard {
    pub kind: PieceKind,
    pub force: Force,
}

impl PieceKind {
    pub fn to_full_algebraic(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_algebraic_char(notation: char) -> Option<Self> {
        match notation {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl PieceOnBoard {
    pub fn to_pictogram(self) -> char { piece_to_pictogram(self.kind, self.force) }
}

// Position encoding letter: upper case for white, lower case for black.
pub fn piece_from_ascii(ch: char) -> Option<PieceOnBoard> {
    let kind = PieceKind::from_algebraic_char(ch.to_ascii_uppercase())?;
    Some(PieceOnBoard::new(kind, Force::from_piece_char(ch)))
}

pub fn piece_to_ascii(piece: PieceOnBoard) -> char {
    let ch = piece.kind.to_full_algebraic();
    match piece.force {
        Force::White => ch,
        Force::Black => ch.to_ascii_lowercase(),
    }
}

pub fn piece_to_pictogram(piece_kind: PieceKind, force: Force) -> char {
    use self::Force::*;
    use self::PieceKind::*;
    match (force, piece_kind) {
        (White, Pawn) => '♙',
        (White, Knight) => '♘',
        (White, Bishop) => '♗',
        (White, Rook) => '♖',
        (White, Queen) => '♕',
        (White, King) => '♔',
        (Black, Pawn) => '♟',
        (Black, Knight) => '♞',
        (Black, Bishop) => '♝',
        (Black, Rook) => '♜',
        (Black, Queen) => '♛',
        (Black, King) => '♚',
    }
}


#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn ascii_case_encodes_force() {
        assert_eq!(piece_from_ascii('K'), Some(PieceOnBoard::new(PieceKind::King, Force::White)));
        assert_eq!(piece_from_ascii('n'), Some(PieceOnBoard::new(PieceKind::Knight, Force::Black)));
        assert_eq!(piece_from_ascii('x'), None);
        assert_eq!(piece_from_ascii('~'), None);
    }

    #[test]
    fn ascii_roundtrip() {
        for ch in "PNBRQKpnbrqk".chars() {
            assert_eq!(piece_to_ascii(piece_from_ascii(ch).unwrap()), ch);
        }
    }

    #[test]
    fn pictograms_are_distinct() {
        let pictograms = Force::iter()
            .cartesian_product(PieceKind::iter())
            .map(|(force, kind)| PieceOnBoard::new(kind, force).to_pictogram())
            .collect_vec();
        assert_eq!(pictograms.len(), 12);
        assert!(pictograms.iter().all_unique());
        assert_eq!(piece_from_ascii('k').unwrap().to_pictogram(), '♚');
    }
}
