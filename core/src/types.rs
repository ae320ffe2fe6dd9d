use core::ops::Range;
use serde::{Deserialize, Serialize};

/// Position of a slot within the word skeleton.
pub type SlotIndex = u8;

/// Position of a tile within the options pool.
pub type OptionIndex = u8;

/// Count type used for blank counts, pool sizes and word lengths.
pub type LetterCount = u8;

/// Letters distractors are drawn from.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Contiguous run of hidden letters `[start, start + len)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankRun {
    start: SlotIndex,
    len: LetterCount,
}

impl BlankRun {
    pub const fn new(start: SlotIndex, len: LetterCount) -> Self {
        Self { start, len }
    }

    pub const fn start(self) -> SlotIndex {
        self.start
    }

    pub const fn len(self) -> LetterCount {
        self.len
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Exclusive end of the run.
    pub const fn end(self) -> usize {
        self.start as usize + self.len as usize
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.start as usize && index < self.end()
    }

    pub fn range(self) -> Range<usize> {
        self.start.into()..self.end()
    }
}

/// How a renderer should present a letter tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterStyle {
    /// Letter placed by the player.
    Active,
    /// Revealed letter of the target word, not interactive.
    Inactive,
    /// Blank waiting for a letter.
    Empty,
}
