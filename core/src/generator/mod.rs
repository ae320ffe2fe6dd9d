use smallvec::SmallVec;

use crate::*;
pub use random::*;

mod random;

/// Random-selection provider used for every structural choice of a puzzle.
pub trait RandomSource {
    /// Uniformly picks an index in `0..upper`. Callers never pass zero.
    fn index_below(&mut self, upper: usize) -> usize;

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }
}

pub trait PuzzleGenerator {
    fn generate(self, word: &str, config: PuzzleConfig) -> Result<Puzzle>;
}

/// Builds a puzzle for `word`, drawing the blank run and distractors from `source`.
pub fn build_puzzle<S: RandomSource>(
    word: &str,
    config: PuzzleConfig,
    source: &mut S,
) -> Result<Puzzle> {
    config.validate()?;

    let word_len = word.chars().count();
    if !config.accepts_word_len(word_len) {
        return Err(PuzzleError::InvalidInput);
    }

    let blank_count = config.blank_count;
    let start = source.index_below(word_len - usize::from(blank_count));
    let start = SlotIndex::try_from(start).map_err(|_| PuzzleError::InvalidInput)?;
    let blank_run = BlankRun::new(start, blank_count);

    let hidden: SmallVec<[char; 4]> = word
        .chars()
        .skip(blank_run.start().into())
        .take(blank_count.into())
        .collect();
    let distractors = sample_distractors(source, config.distractor_count(), &hidden);

    let mut puzzle = Puzzle::new(word, blank_run, &distractors)?;
    if config.shuffle_options {
        puzzle.shuffle_options(source);
    }

    log::debug!(
        "Generated puzzle for {:?}, blanks {:?}, options {:?}",
        word,
        blank_run.range(),
        puzzle.options().letters().collect::<SmallVec<[char; 8]>>()
    );
    Ok(puzzle)
}

/// Picks up to `amount` distinct letters of [`ALPHABET`] that are not in `blacklist`.
///
/// Letters are drawn without replacement, so this finishes after at most
/// `amount` draws. When the blacklist leaves fewer than `amount` letters, all
/// of them are returned.
pub fn sample_distractors<S: RandomSource>(
    source: &mut S,
    amount: usize,
    blacklist: &[char],
) -> SmallVec<[char; 26]> {
    let mut free: SmallVec<[char; 26]> = ALPHABET
        .chars()
        .filter(|letter| !blacklist.contains(letter))
        .collect();

    if amount > free.len() {
        log::warn!(
            "Alphabet exhausted, requested {} distractors but only {} letters remain",
            amount,
            free.len()
        );
    }

    let mut picked = SmallVec::new();
    while picked.len() < amount && !free.is_empty() {
        let index = source.index_below(free.len());
        picked.push(free.remove(index));
    }
    picked
}
