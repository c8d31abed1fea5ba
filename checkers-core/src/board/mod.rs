mod checkers_board;
mod movegen;

pub use checkers_board::Board;
pub use movegen::successors;
