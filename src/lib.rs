#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board_view;
pub mod client;
pub mod coord;
pub mod display;
pub mod error;
pub mod event;
pub mod fen;
pub mod force;
pub mod grid;
pub mod piece;
pub mod test_util;

pub use board_view::{BoardView, Cell};
pub use client::{ClickOutcome, ClientState, NotableEvent, Session, SessionKind};
pub use coord::{Col, Coord, Row};
pub use display::{BoardOrientation, DisplayCoord, SquareShade};
pub use error::EventError;
pub use event::{ClientEvent, ServerEvent};
pub use force::Force;
pub use piece::{PieceKind, PieceOnBoard};
