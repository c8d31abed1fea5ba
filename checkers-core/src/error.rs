use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckersError {
    #[error("unexpected character '{0}' in board text")]
    BadFormat(char),

    #[error("row {row} has width {found}, expected {width}")]
    RowWidthMismatch {
        row: usize,
        found: usize,
        width: usize,
    },

    #[error("a man cannot start the game already sitting on its own king row")]
    InvalidPosition,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
