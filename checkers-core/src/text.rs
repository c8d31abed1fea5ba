//! Row-per-line board text format: `.`, `r`, `R`, `b`, `B`, one character
//! per square, one line per row, top row first (matching `Board`'s own
//! `Display` impl). Multiple boards can be joined into one buffer with
//! `BOARD_SEPARATOR`, the same convention the original solver's string API
//! used for returning a line of play in one shot.

use crate::board::Board;
use crate::color::Color;
use crate::error::CheckersError;
use crate::rank::Rank;

pub const BOARD_SEPARATOR: &str = "---\n";

pub fn read_board(text: &str) -> Result<Board, CheckersError> {
    let mut board = Board::empty();
    let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();

    for (row_i, row) in rows.iter().enumerate() {
        let row = row.trim_end();
        if row.chars().count() != Board::WIDTH as usize {
            return Err(CheckersError::RowWidthMismatch {
                row: row_i,
                found: row.chars().count(),
                width: Board::WIDTH as usize,
            });
        }

        let y = row_i as u8;
        for (x, ch) in row.chars().enumerate() {
            let square = Board::square_of(x as u8, y);
            match ch {
                '.' => {}
                'r' => board.set_piece(square, Color::Red, Rank::Man),
                'R' => board.set_piece(square, Color::Red, Rank::King),
                'b' => board.set_piece(square, Color::Black, Rank::Man),
                'B' => board.set_piece(square, Color::Black, Rank::King),
                other => return Err(CheckersError::BadFormat(other)),
            }

            let man_on_own_king_row = matches!(ch, 'r') && y == 0
                || matches!(ch, 'b') && y == Board::HEIGHT - 1;
            if man_on_own_king_row {
                return Err(CheckersError::InvalidPosition);
            }
        }
    }

    Ok(board)
}

pub fn render_board(board: &Board) -> String {
    board.to_string()
}

/// Joins several boards into one buffer, separated by [`BOARD_SEPARATOR`].
pub fn render_many(boards: &[Board]) -> String {
    boards
        .iter()
        .map(render_board)
        .collect::<Vec<_>>()
        .join(BOARD_SEPARATOR)
}

/// Splits a buffer produced by [`render_many`] back into individual boards.
pub fn read_many(text: &str) -> Result<Vec<Board>, CheckersError> {
    text.split(BOARD_SEPARATOR)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(read_board)
        .collect()
}
