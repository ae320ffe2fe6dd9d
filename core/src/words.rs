use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Built-in dictionary puzzles are drawn from.
pub const DEFAULT_WORDS: &[&str] = &[
    "apple", "banana", "orange", "lemon", "cherry", "grape", "melon", "peach", "plum", "mango",
    "house", "garden", "window", "door", "table", "chair", "kitchen", "pillow", "blanket", "mirror",
    "river", "mountain", "forest", "ocean", "island", "desert", "valley", "meadow", "canyon",
    "planet", "rocket", "comet", "galaxy", "orbit", "school", "pencil", "student", "lesson",
    "letter", "number", "puzzle", "answer", "question", "winter", "summer", "spring", "autumn",
    "friend", "family", "doctor", "bridge", "castle", "dragon", "knight", "wizard", "guitar",
    "piano", "violin", "trumpet", "rabbit", "turtle", "monkey", "tiger", "zebra", "giraffe",
    "kitten", "puppy", "bread", "butter", "cheese", "coffee", "sugar", "honey", "yellow",
    "purple", "silver", "golden", "travel", "ticket", "market", "jacket", "basket", "candle",
];

/// Word list provider for puzzle generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Trims and lowercases every entry, dropping blank ones.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    pub fn embedded() -> Self {
        Self::new(DEFAULT_WORDS)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words long enough to keep a visible letter with `config`'s blanks.
    pub fn eligible(&self, config: PuzzleConfig) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(move |word| config.accepts_word_len(word.chars().count()))
    }

    /// Uniformly picks one eligible word.
    pub fn choose<S: RandomSource>(&self, source: &mut S, config: PuzzleConfig) -> Result<&str> {
        let count = self.eligible(config).count();
        if count == 0 {
            return Err(PuzzleError::NoEligibleWord);
        }
        let pick = source.index_below(count);
        self.eligible(config)
            .nth(pick)
            .ok_or(PuzzleError::NoEligibleWord)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::embedded()
    }
}
