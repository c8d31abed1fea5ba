use std::cmp::Ordering;
use std::fmt::{self, Display};

/// A search result: either a forced win for one side, or a material-based
/// evaluation. Kept as a sum type instead of signed IEEE infinities so
/// `BlackWin`/`RedWin` can never be accidentally compared or arithmetic'd
/// as ordinary floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    BlackWin,
    Value(f32),
    RedWin,
}

impl Score {
    pub fn worst_for(maximizing: bool) -> Self {
        if maximizing {
            Score::BlackWin
        } else {
            Score::RedWin
        }
    }

    fn rank(&self) -> (i8, f32) {
        match self {
            Score::BlackWin => (-1, 0.0),
            Score::Value(v) => (0, *v),
            Score::RedWin => (1, 0.0),
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (sa, va) = self.rank();
        let (sb, vb) = other.rank();
        match sa.cmp(&sb) {
            Ordering::Equal => va.partial_cmp(&vb),
            ord => Some(ord),
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::BlackWin => write!(f, "Black wins"),
            Score::RedWin => write!(f, "Red wins"),
            Score::Value(v) => write!(f, "{:+.2}", v),
        }
    }
}
