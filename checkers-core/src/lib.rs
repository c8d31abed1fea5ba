mod bitboard;
mod board;
mod color;
mod error;
mod rank;
mod text;
mod zobrist;

pub use bitboard::BitBoard;
pub use board::{successors, Board};
pub use color::Color;
pub use error::CheckersError;
pub use rank::Rank;
pub use text::{read_board, read_many, render_board, render_many, BOARD_SEPARATOR};
