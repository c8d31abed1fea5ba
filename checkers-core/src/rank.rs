use crate::color::Color;

/// A man or a king, independent of color. Combined with `Color` this gives
/// the four piece kinds tracked by `Board`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

impl Rank {
    // Four distinct kinds total: (color, rank) pairs. Used to index into
    // the zobrist table, so a promotion always changes the hash even if
    // every other square on the board stays put.
    pub const fn to_zobrist_index(&self, color: Color) -> usize {
        match (color, self) {
            (Color::Red, Rank::Man) => 0,
            (Color::Red, Rank::King) => 1,
            (Color::Black, Rank::Man) => 2,
            (Color::Black, Rank::King) => 3,
        }
    }

    pub fn as_char(&self, color: Color) -> char {
        match (color, self) {
            (Color::Red, Rank::Man) => 'r',
            (Color::Red, Rank::King) => 'R',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        }
    }
}
