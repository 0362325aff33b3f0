use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


// The side a client plays for. The server calls it "role" and spells it in lower case.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Force {
    White,
    Black,
}

impl Force {
    pub fn from_piece_char(ch: char) -> Force {
        if ch.is_ascii_uppercase() { Force::White } else { Force::Black }
    }

    pub fn name(self) -> &'static str {
        match self {
            Force::White => "white",
            Force::Black => "black",
        }
    }
}
