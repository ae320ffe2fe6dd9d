#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;
pub use validate::*;
pub use words::*;

mod board;
mod engine;
mod error;
mod generator;
mod tile;
mod types;
mod validate;
mod words;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of consecutive letters hidden from the word.
    pub blank_count: LetterCount,
    /// Pool size as a multiple of `blank_count`, distractors fill the rest.
    pub option_multiplier: LetterCount,
    /// Shuffle the pool instead of listing hidden letters first.
    pub shuffle_options: bool,
}

impl PuzzleConfig {
    pub const DEFAULT_BLANK_COUNT: LetterCount = 2;
    pub const DEFAULT_OPTION_MULTIPLIER: LetterCount = 2;

    pub const fn new_unchecked(blank_count: LetterCount, option_multiplier: LetterCount) -> Self {
        Self {
            blank_count,
            option_multiplier,
            shuffle_options: false,
        }
    }

    pub fn new(blank_count: LetterCount, option_multiplier: LetterCount) -> Self {
        let blank_count = blank_count.max(1);
        let option_multiplier = option_multiplier.max(1);
        Self::new_unchecked(blank_count, option_multiplier)
    }

    pub const fn with_shuffled_options(mut self, shuffle_options: bool) -> Self {
        self.shuffle_options = shuffle_options;
        self
    }

    /// How many distractor letters a puzzle asks for.
    pub const fn distractor_count(&self) -> usize {
        (self.option_multiplier as usize).saturating_sub(1) * self.blank_count as usize
    }

    /// Shortest word that still keeps one letter visible.
    pub const fn min_word_len(&self) -> usize {
        self.blank_count as usize + 1
    }

    pub fn validate(&self) -> Result<()> {
        if self.blank_count == 0 || self.option_multiplier == 0 {
            Err(PuzzleError::InvalidInput)
        } else {
            Ok(())
        }
    }

    pub fn accepts_word_len(&self, len: usize) -> bool {
        len >= self.min_word_len() && len <= usize::from(SlotIndex::MAX)
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_BLANK_COUNT, Self::DEFAULT_OPTION_MULTIPLIER)
    }
}

/// A generated puzzle: target word, hidden run, skeleton and options pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    word: String,
    blank_run: BlankRun,
    skeleton: WordSkeleton,
    options: OptionsPool,
}

impl Puzzle {
    /// Builds a puzzle with the pool laid out as hidden letters then `distractors`.
    pub fn new(word: &str, blank_run: BlankRun, distractors: &[char]) -> Result<Self> {
        let letters: Vec<char> = word.chars().collect();
        if blank_run.is_empty()
            || usize::from(blank_run.len()) >= letters.len()
            || blank_run.end() > letters.len()
            || letters.len() > usize::from(SlotIndex::MAX)
            || usize::from(blank_run.len()) + distractors.len()
                > usize::from(OptionIndex::MAX) + 1
        {
            return Err(PuzzleError::InvalidInput);
        }

        let skeleton = WordSkeleton::from_word(&letters, blank_run);
        let options = OptionsPool::from_letters(
            letters[blank_run.range()]
                .iter()
                .chain(distractors)
                .copied(),
        );

        Ok(Self {
            word: word.into(),
            blank_run,
            skeleton,
            options,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn blank_run(&self) -> BlankRun {
        self.blank_run
    }

    pub fn skeleton(&self) -> &WordSkeleton {
        &self.skeleton
    }

    pub fn options(&self) -> &OptionsPool {
        &self.options
    }

    /// Letters removed by the blank run, in word order.
    pub fn hidden_letters(&self) -> SmallVec<[char; 4]> {
        self.word
            .chars()
            .skip(self.blank_run.start().into())
            .take(self.blank_run.len().into())
            .collect()
    }

    /// Pool letters that do not belong in any blank.
    pub fn distractors(&self) -> SmallVec<[char; 4]> {
        let hidden = self.hidden_letters();
        self.options
            .letters()
            .filter(|letter| !hidden.contains(letter))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        is_complete(&self.skeleton)
    }

    pub fn is_correct(&self) -> bool {
        is_correct(&self.skeleton, &self.word)
    }

    pub(crate) fn board_mut(&mut self) -> (&mut WordSkeleton, &mut OptionsPool) {
        (&mut self.skeleton, &mut self.options)
    }

    pub(crate) fn shuffle_options<S: RandomSource>(&mut self, source: &mut S) {
        self.options.shuffle_with(source);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Letter placed, blanks remain.
    Placed,
    /// Letter returned to the pool.
    Retracted,
    /// Every blank filled but the word is wrong.
    Mismatch,
    /// Every blank filled with the right letters.
    Solved,
}

impl MoveOutcome {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_constants() {
        let config = PuzzleConfig::default();

        assert_eq!(config.blank_count, 2);
        assert_eq!(config.option_multiplier, 2);
        assert!(!config.shuffle_options);
        assert_eq!(config.distractor_count(), 2);
        assert_eq!(config.min_word_len(), 3);
    }

    #[test]
    fn config_new_clamps_zero_values() {
        let config = PuzzleConfig::new(0, 0);

        assert_eq!(config, PuzzleConfig::new_unchecked(1, 1));
        assert_eq!(config.distractor_count(), 0);
        assert!(PuzzleConfig::new_unchecked(0, 2).validate().is_err());
    }

    #[test]
    fn puzzle_lists_hidden_letters_then_distractors() {
        let puzzle = Puzzle::new("apple", BlankRun::new(1, 2), &['x', 'z']).unwrap();

        assert_eq!(puzzle.hidden_letters().as_slice(), &['p', 'p']);
        assert_eq!(puzzle.distractors().as_slice(), &['x', 'z']);
        assert!(puzzle.options().letters().eq(['p', 'p', 'x', 'z']));
        assert!(!puzzle.is_complete());
    }

    #[test]
    fn puzzle_rejects_runs_that_hide_the_whole_word() {
        assert_eq!(
            Puzzle::new("ab", BlankRun::new(0, 2), &[]),
            Err(PuzzleError::InvalidInput)
        );
        assert_eq!(
            Puzzle::new("abc", BlankRun::new(2, 2), &[]),
            Err(PuzzleError::InvalidInput)
        );
        assert_eq!(
            Puzzle::new("abc", BlankRun::new(0, 0), &[]),
            Err(PuzzleError::InvalidInput)
        );
    }

    #[test]
    fn pool_must_fit_option_indices() {
        let mut word: String = core::iter::repeat_n('a', 254).collect();
        word.push('b');
        let distractors: Vec<char> = ALPHABET.chars().filter(|&letter| letter != 'a').collect();

        assert_eq!(
            Puzzle::new(&word, BlankRun::new(0, 254), &distractors),
            Err(PuzzleError::InvalidInput)
        );

        let puzzle = Puzzle::new(&word, BlankRun::new(0, 254), &['b', 'c']).unwrap();
        assert_eq!(puzzle.options().len(), usize::from(OptionIndex::MAX) + 1);
        assert_eq!(puzzle.options().first_available('c'), Some(OptionIndex::MAX));
    }
}
