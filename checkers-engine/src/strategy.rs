use rustc_hash::FxHashMap;

use checkers_core::{Board, Color};

use crate::score::Score;

/// Records, for every (position, side-to-move) pair the search actually
/// visited, which successor it judged best. Grounded directly on the
/// source generator's `ExploreState.strategy` dict and
/// `recover_best_path`: walking this map from the root recovers the full
/// principal variation without re-running the search.
#[derive(Default)]
pub struct StrategyTable {
    entries: FxHashMap<(u64, Color), (Board, Score)>,
}

impl StrategyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `successor` as the best reply found so far for `(hash,
    /// side)`. The first successor explored for a node is always recorded,
    /// even if its score does not beat the initial alpha/beta sentinel;
    /// later calls only overwrite when `score` is a strict improvement.
    /// This mirrors `update_strategy` in the source generator, which has
    /// exactly this "first move wins ties with the unset case" behavior.
    pub fn record(&mut self, hash: u64, side: Color, successor: Board, score: Score, maximizing: bool) {
        match self.entries.get(&(hash, side)) {
            None => {
                self.entries.insert((hash, side), (successor, score));
            }
            Some((_, existing)) => {
                let improves = if maximizing {
                    score > *existing
                } else {
                    score < *existing
                };
                if improves {
                    self.entries.insert((hash, side), (successor, score));
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Walks the strategy map from `root`, alternating side each step,
    /// stopping at the first position with no recorded successor or at a
    /// position already seen earlier in the line (a cycle, which would
    /// otherwise recurse forever).
    pub fn recover_pv(&self, root: Board, side_to_move: Color) -> Vec<Board> {
        let mut line = vec![root];
        let mut seen = std::collections::HashSet::new();
        seen.insert(root.hash());

        let mut current = root;
        let mut side = side_to_move;

        while let Some((next, _)) = self.entries.get(&(current.hash(), side)) {
            if !seen.insert(next.hash()) {
                break;
            }
            line.push(*next);
            current = *next;
            side = !side;
        }

        line
    }
}
