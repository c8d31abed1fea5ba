use rustc_hash::FxHashMap;

use checkers_core::Color;

/// Tracks the (position hash, side to move) pairs on the current search
/// path, so the engine can refuse to descend into a node it is already in
/// the middle of exploring. Grounded on the source generator's `Stack`
/// class: an ordered list of frames plus a frequency-count map, so
/// membership is an O(1) lookup rather than an O(depth) scan.
#[derive(Default)]
pub struct SearchStack {
    frames: Vec<(u64, Color)>,
    counts: FxHashMap<(u64, Color), u32>,
}

impl SearchStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, hash: u64, side: Color) {
        self.frames.push((hash, side));
        *self.counts.entry((hash, side)).or_insert(0) += 1;
    }

    pub fn pop(&mut self) {
        if let Some(key) = self.frames.pop() {
            if let Some(count) = self.counts.get_mut(&key) {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&key);
                }
            }
        }
    }

    pub fn contains(&self, hash: u64, side: Color) -> bool {
        self.counts.contains_key(&(hash, side))
    }
}
