use serde::{Deserialize, Serialize};

use crate::LetterStyle;

/// Single position of the word skeleton.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// Revealed letter of the target word.
    Fixed(char),
    /// Blank inside the hidden run.
    Empty,
    /// Blank the player filled from the options pool.
    Filled(char),
}

impl Slot {
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Fixed(letter) | Self::Filled(letter) => Some(letter),
            Self::Empty => None,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled(_))
    }

    pub const fn style(self) -> LetterStyle {
        match self {
            Self::Fixed(_) => LetterStyle::Inactive,
            Self::Empty => LetterStyle::Empty,
            Self::Filled(_) => LetterStyle::Active,
        }
    }
}

/// Letter tile of the options pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionTile {
    letter: char,
    available: bool,
}

impl OptionTile {
    pub const fn new(letter: char) -> Self {
        Self {
            letter,
            available: true,
        }
    }

    pub const fn letter(self) -> char {
        self.letter
    }

    pub const fn is_available(self) -> bool {
        self.available
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}
