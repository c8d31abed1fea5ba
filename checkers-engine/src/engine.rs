use std::time::{Duration, Instant};

use checkers_core::{successors, Board, Color};

use crate::score::Score;
use crate::search_stack::SearchStack;
use crate::strategy::StrategyTable;
use crate::transposition::TranspositionTable;

/// Runs one depth-limited, alpha-beta-pruned minimax search from a single
/// root position. All mutable search state (transposition table, current
/// path, recorded strategy) lives here, owned exclusively by this search —
/// nothing is shared across calls to [`solve`], matching the single
/// threaded, per-search-exclusive ownership model the source generator
/// uses (one `ExploreState` per top-level call). Deadline handling is
/// grounded on the source engine's `TimeManager`, simplified to a single
/// `Instant`-based cutoff since there is no time-control-stage concept to
/// carry over here.
pub struct SearchEngine {
    tt: TranspositionTable,
    stack: SearchStack,
    strategy: StrategyTable,
    deadline: Instant,
    nodes: u64,
}

impl SearchEngine {
    fn new(max_time: Duration) -> Self {
        SearchEngine {
            tt: TranspositionTable::new(),
            stack: SearchStack::new(),
            strategy: StrategyTable::new(),
            deadline: Instant::now() + max_time,
            nodes: 0,
        }
    }

    fn timed_out(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// The 9-step search: deadline check, transposition probe, terminal
    /// check, cycle-guarded child iteration with alpha-beta pruning,
    /// strategy recording, transposition store.
    fn minimax(
        &mut self,
        board: &Board,
        side: Color,
        depth_remaining: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes += 1;

        // 1. Respect the wall-clock budget at every frame entry.
        if self.timed_out() {
            return board_value(board);
        }

        let hash = board.hash();

        // 2. Transposition probe.
        if let Some(cached) = self.tt.get(hash, depth_remaining, side) {
            return cached;
        }

        // 3a. Terminal test by piece count: one color is already wiped out,
        // independent of whose turn it is. Must be checked ahead of the
        // depth cutoff below — a position that is already decided is not a
        // heuristic estimate, even if the horizon happens to end exactly
        // here.
        if let Some(winner) = board.winner() {
            let result = match winner {
                Color::Red => Score::RedWin,
                Color::Black => Score::BlackWin,
            };
            self.tt.put(hash, depth_remaining, side, result);
            return result;
        }

        // 3b. Terminal test by no legal moves: a side with no legal moves
        // has lost, whether because it's blocked or because (redundantly
        // with 3a, but cheaply) it has no pieces.
        let children = successors(board, side);
        if children.is_empty() {
            let result = match side {
                Color::Red => Score::BlackWin,
                Color::Black => Score::RedWin,
            };
            self.tt.put(hash, depth_remaining, side, result);
            return result;
        }

        // 4. Depth cutoff: fall back to the leaf heuristic.
        if depth_remaining == 0 {
            return Score::Value(board.utility());
        }

        let maximizing = side == Color::Red;
        let opponent = !side;
        let mut best: Option<(Score, Board)> = None;

        // 5. Order children by static evaluation before recursing: best-for-
        // the-mover first. This is what makes the alpha-beta cutoff below
        // actually prune — a bad ordering degrades to plain minimax.
        let mut children = children;
        if maximizing {
            children.sort_by(|a, b| b.evaluate().partial_cmp(&a.evaluate()).unwrap_or(std::cmp::Ordering::Equal));
        } else {
            children.sort_by(|a, b| a.evaluate().partial_cmp(&b.evaluate()).unwrap_or(std::cmp::Ordering::Equal));
        }

        self.stack.push(hash, side);

        for child in children {
            // 6. Cycle guard: never re-enter a position already on the
            // current search path.
            if self.stack.contains(child.hash(), opponent) {
                continue;
            }

            let score = self.minimax(&child, opponent, depth_remaining - 1, alpha, beta);

            // 7. Record the first child explored unconditionally, then
            // only overwrite on a strict improvement. This mirrors the
            // source generator's strategy-update rule, and ensures every
            // node gets a recorded best move even when every child ties
            // the initial alpha/beta sentinel (e.g. every line loses).
            let improves = match &best {
                None => true,
                Some((existing, _)) => {
                    if maximizing {
                        score > *existing
                    } else {
                        score < *existing
                    }
                }
            };
            if improves {
                best = Some((score, child));
            }

            // 7 (continued). Alpha-beta update and cutoff.
            if maximizing {
                if score > alpha {
                    alpha = score;
                }
            } else if score < beta {
                beta = score;
            }
            if alpha >= beta {
                break;
            }

            if self.timed_out() {
                break;
            }
        }

        self.stack.pop();

        let (result, best_child) = best.unwrap_or_else(|| (board_value(board), *board));

        // 7 (continued). Record the best child found as the PV edge out of
        // this node.
        self.strategy.record(hash, side, best_child, result, maximizing);

        // 8. Cache the result for this depth and side.
        self.tt.put(hash, depth_remaining, side, result);

        result
    }
}

fn board_value(board: &Board) -> Score {
    Score::Value(board.utility())
}

/// Searches `board` (with `Color::Red` to move) to `max_depth` plies or
/// until `max_time_seconds` elapses, whichever comes first, and returns the
/// principal variation: the sequence of boards from `board` through the
/// best line of play either side found for itself.
pub fn solve(board: Board, max_depth: u32, max_time_seconds: u64) -> Vec<Board> {
    let mut engine = SearchEngine::new(Duration::from_secs(max_time_seconds));
    let alpha = Score::worst_for(true);
    let beta = Score::worst_for(false);
    engine.minimax(&board, Color::Red, max_depth, alpha, beta);
    engine.strategy.recover_pv(board, Color::Red)
}
