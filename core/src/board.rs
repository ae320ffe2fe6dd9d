use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Per-letter slot sequence of the target word. Never resized after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSkeleton {
    slots: Vec<Slot>,
}

impl WordSkeleton {
    /// Builds the skeleton for `word` with every slot inside `blank_run` left empty.
    pub fn from_word(word: &[char], blank_run: BlankRun) -> Self {
        let slots = word
            .iter()
            .enumerate()
            .map(|(index, &letter)| {
                if blank_run.contains(index) {
                    Slot::Empty
                } else {
                    Slot::Fixed(letter)
                }
            })
            .collect();
        Self { slots }
    }

    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_at(&self, index: SlotIndex) -> Option<Slot> {
        self.slots.get(usize::from(index)).copied()
    }

    pub fn validate_slot(&self, index: SlotIndex) -> Result<SlotIndex> {
        if usize::from(index) < self.slots.len() {
            Ok(index)
        } else {
            Err(PuzzleError::InvalidSlot)
        }
    }

    pub fn first_empty(&self) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|slot| slot.is_empty())
            .and_then(|index| index.try_into().ok())
    }

    pub fn empty_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_empty()).count()
    }

    pub(crate) fn fill(&mut self, index: SlotIndex, letter: char) -> Result<()> {
        let slot = self
            .slots
            .get_mut(usize::from(index))
            .ok_or(PuzzleError::InvalidSlot)?;
        match slot {
            Slot::Empty => {
                *slot = Slot::Filled(letter);
                Ok(())
            }
            _ => Err(PuzzleError::SlotUnavailableForPlacement),
        }
    }

    /// Empties a filled slot, returning the letter it held.
    pub(crate) fn clear(&mut self, index: SlotIndex) -> Result<char> {
        let slot = self
            .slots
            .get_mut(usize::from(index))
            .ok_or(PuzzleError::InvalidSlot)?;
        match *slot {
            Slot::Filled(letter) => {
                *slot = Slot::Empty;
                Ok(letter)
            }
            _ => Err(PuzzleError::SlotUnavailableForRetraction),
        }
    }
}

impl Index<SlotIndex> for WordSkeleton {
    type Output = Slot;

    fn index(&self, index: SlotIndex) -> &Self::Output {
        &self.slots[usize::from(index)]
    }
}

/// Letter tiles offered to the player. Tiles are never added or removed, only
/// toggled between available and placed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsPool {
    tiles: Vec<OptionTile>,
}

impl OptionsPool {
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            tiles: letters.into_iter().map(OptionTile::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[OptionTile] {
        &self.tiles
    }

    pub fn tile_at(&self, index: OptionIndex) -> Option<OptionTile> {
        self.tiles.get(usize::from(index)).copied()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.tiles.iter().map(|tile| tile.letter())
    }

    pub fn available_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_available()).count()
    }

    pub fn first_available(&self, letter: char) -> Option<OptionIndex> {
        self.tiles
            .iter()
            .position(|tile| tile.is_available() && tile.letter() == letter)
            .and_then(|index| index.try_into().ok())
    }

    pub fn validate_option(&self, index: OptionIndex) -> Result<OptionIndex> {
        if usize::from(index) < self.tiles.len() {
            Ok(index)
        } else {
            Err(PuzzleError::InvalidOption)
        }
    }

    pub(crate) fn shuffle_with<S: RandomSource>(&mut self, source: &mut S) {
        source.shuffle(&mut self.tiles);
    }

    /// Marks an available tile as placed, returning its letter.
    pub(crate) fn take(&mut self, index: OptionIndex) -> Result<char> {
        let tile = self
            .tiles
            .get_mut(usize::from(index))
            .ok_or(PuzzleError::InvalidOption)?;
        if !tile.is_available() {
            return Err(PuzzleError::SlotUnavailableForPlacement);
        }
        tile.set_available(false);
        Ok(tile.letter())
    }

    /// First placed tile holding `letter`.
    ///
    /// Tiles are matched by letter, not by the tile that was originally
    /// placed, so the lowest matching index wins.
    pub fn first_placed(&self, letter: char) -> Option<OptionIndex> {
        self.tiles
            .iter()
            .position(|tile| !tile.is_available() && tile.letter() == letter)
            .and_then(|index| index.try_into().ok())
    }

    /// Makes a placed tile available again.
    pub(crate) fn restore(&mut self, index: OptionIndex) -> Result<char> {
        let tile = self
            .tiles
            .get_mut(usize::from(index))
            .ok_or(PuzzleError::InvalidOption)?;
        if tile.is_available() {
            return Err(PuzzleError::SlotUnavailableForRetraction);
        }
        tile.set_available(true);
        Ok(tile.letter())
    }
}

impl Index<OptionIndex> for OptionsPool {
    type Output = OptionTile;

    fn index(&self, index: OptionIndex) -> &Self::Output {
        &self.tiles[usize::from(index)]
    }
}
