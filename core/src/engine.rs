use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Ready,
    Active,
    Solved,
}

impl SessionState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Synchronous command interface a renderer drives with player taps.
///
/// Failed moves never mutate the puzzle, so the caller can simply ignore them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySession {
    puzzle: Puzzle,
    state: SessionState,
}

impl PlaySession {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn word(&self) -> &str {
        self.puzzle.word()
    }

    pub fn slots(&self) -> &[Slot] {
        self.puzzle.skeleton().slots()
    }

    pub fn options(&self) -> &[OptionTile] {
        self.puzzle.options().tiles()
    }

    pub fn style_at(&self, slot: SlotIndex) -> Option<LetterStyle> {
        self.puzzle.skeleton().slot_at(slot).map(Slot::style)
    }

    pub fn is_complete(&self) -> bool {
        self.puzzle.is_complete()
    }

    pub fn is_correct(&self) -> bool {
        self.puzzle.is_correct()
    }

    /// Moves the letter of `option` into the empty `slot`.
    pub fn place(&mut self, option: OptionIndex, slot: SlotIndex) -> Result<MoveOutcome> {
        self.check_not_solved()?;
        let option = self.puzzle.options().validate_option(option)?;
        let slot = self.puzzle.skeleton().validate_slot(slot)?;

        let tile = self.puzzle.options()[option];
        if !tile.is_available() || !self.puzzle.skeleton()[slot].is_empty() {
            return Err(PuzzleError::SlotUnavailableForPlacement);
        }

        let (skeleton, options) = self.puzzle.board_mut();
        let letter = options.take(option)?;
        skeleton.fill(slot, letter)?;
        log::trace!("Placed {:?} from option {} into slot {}", letter, option, slot);

        Ok(self.after_placement())
    }

    /// Moves the letter of `option` into the first empty slot.
    pub fn place_next(&mut self, option: OptionIndex) -> Result<MoveOutcome> {
        self.check_not_solved()?;
        let slot = self
            .puzzle
            .skeleton()
            .first_empty()
            .ok_or(PuzzleError::SlotUnavailableForPlacement)?;
        self.place(option, slot)
    }

    /// Places the first available option holding `letter` into `slot`.
    pub fn place_letter(&mut self, letter: char, slot: SlotIndex) -> Result<MoveOutcome> {
        self.check_not_solved()?;
        let option = self
            .puzzle
            .options()
            .first_available(letter)
            .ok_or(PuzzleError::SlotUnavailableForPlacement)?;
        self.place(option, slot)
    }

    /// Empties a filled `slot`, making a matching option available again.
    pub fn retract(&mut self, slot: SlotIndex) -> Result<MoveOutcome> {
        self.check_not_solved()?;
        let slot = self.puzzle.skeleton().validate_slot(slot)?;

        let Slot::Filled(letter) = self.puzzle.skeleton()[slot] else {
            return Err(PuzzleError::SlotUnavailableForRetraction);
        };
        // a restored snapshot may hold a filled slot with no placed tile behind it
        let option = self
            .puzzle
            .options()
            .first_placed(letter)
            .ok_or(PuzzleError::SlotUnavailableForRetraction)?;

        let (skeleton, options) = self.puzzle.board_mut();
        skeleton.clear(slot)?;
        options.restore(option)?;
        log::trace!("Retracted {:?} from slot {} into option {}", letter, slot, option);

        self.mark_started();
        Ok(MoveOutcome::Retracted)
    }

    fn after_placement(&mut self) -> MoveOutcome {
        self.mark_started();
        if !self.puzzle.is_complete() {
            return MoveOutcome::Placed;
        }

        if self.puzzle.is_correct() {
            self.state = SessionState::Solved;
            log::debug!("Puzzle {:?} solved", self.puzzle.word());
            MoveOutcome::Solved
        } else {
            MoveOutcome::Mismatch
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = SessionState::Active;
        }
    }

    fn check_not_solved(&self) -> Result<()> {
        if self.state.is_solved() {
            Err(PuzzleError::AlreadySolved)
        } else {
            Ok(())
        }
    }
}
