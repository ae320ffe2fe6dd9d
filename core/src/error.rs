use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid input, word must be longer than the blank run")]
    InvalidInput,
    #[error("Slot is not available for placement")]
    SlotUnavailableForPlacement,
    #[error("Slot is not available for retraction")]
    SlotUnavailableForRetraction,
    #[error("Invalid slot index")]
    InvalidSlot,
    #[error("Invalid option index")]
    InvalidOption,
    #[error("Puzzle already solved, no new moves are accepted")]
    AlreadySolved,
    #[error("Word list has no word long enough for the configured blanks")]
    NoEligibleWord,
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
