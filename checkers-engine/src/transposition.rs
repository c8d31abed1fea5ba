use rustc_hash::FxHashMap;

use checkers_core::Color;

use crate::score::Score;

#[derive(Clone, Copy)]
struct Entry {
    depth: u32,
    side: Color,
    score: Score,
}

/// Caches minimax results keyed by position hash. A cached entry is only
/// usable if it was computed for the same side to move and at least as
/// deep a search as the one currently being requested; otherwise the
/// cached number doesn't answer the question being asked. `put` always
/// overwrites, matching the source implementation's cache (no
/// alpha/beta-bound-aware replacement scheme).
#[derive(Default)]
pub struct TranspositionTable {
    entries: FxHashMap<u64, Entry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hash: u64, depth_remaining: u32, side: Color) -> Option<Score> {
        self.entries.get(&hash).and_then(|entry| {
            if entry.side == side && entry.depth >= depth_remaining {
                Some(entry.score)
            } else {
                None
            }
        })
    }

    pub fn put(&mut self, hash: u64, depth_remaining: u32, side: Color, score: Score) {
        self.entries.insert(
            hash,
            Entry {
                depth: depth_remaining,
                side,
                score,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
