use rand::prelude::*;

use super::*;

/// Default [`RandomSource`], a small seeded PRNG so puzzles can be replayed.
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: SmallRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn index_below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Generation strategy with a uniformly random blank run and distractors.
#[derive(Clone, Debug)]
pub struct RandomPuzzleGenerator<S = SeededSource> {
    source: S,
}

impl RandomPuzzleGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_source(SeededSource::new(seed))
    }
}

impl<S: RandomSource> RandomPuzzleGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Picks a word long enough for `config` from `words` and builds its puzzle.
    pub fn generate_from(mut self, words: &WordList, config: PuzzleConfig) -> Result<Puzzle> {
        config.validate()?;
        let word = words.choose(&mut self.source, config)?;
        log::debug!("Picked word {:?} out of {} words", word, words.len());
        build_puzzle(word, config, &mut self.source)
    }
}

impl<S: RandomSource> PuzzleGenerator for RandomPuzzleGenerator<S> {
    fn generate(mut self, word: &str, config: PuzzleConfig) -> Result<Puzzle> {
        build_puzzle(word, config, &mut self.source)
    }
}
