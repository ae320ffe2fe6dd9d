use alloc::string::String;

use crate::*;

/// Whether every blank of the skeleton holds a letter.
pub fn is_complete(skeleton: &WordSkeleton) -> bool {
    skeleton.slots().iter().all(|slot| !slot.is_empty())
}

/// Concatenation of all slot letters, `None` while a blank remains.
pub fn current_word(skeleton: &WordSkeleton) -> Option<String> {
    skeleton.slots().iter().map(|slot| slot.letter()).collect()
}

/// Whether the filled skeleton spells `target` exactly. Always false while
/// incomplete.
pub fn is_correct(skeleton: &WordSkeleton, target: &str) -> bool {
    if skeleton.len() != target.chars().count() {
        return false;
    }
    skeleton
        .slots()
        .iter()
        .zip(target.chars())
        .all(|(slot, expected)| slot.letter() == Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn skeleton(slots: &[Slot]) -> WordSkeleton {
        WordSkeleton::from_slots(slots.to_vec())
    }

    #[test]
    fn incomplete_skeleton_is_never_correct() {
        let skeleton = skeleton(&[Slot::Fixed('a'), Slot::Empty, Slot::Fixed('e')]);

        assert!(!is_complete(&skeleton));
        assert_eq!(current_word(&skeleton), None);
        assert!(!is_correct(&skeleton, "ace"));
    }

    #[test]
    fn filled_skeleton_compares_whole_word() {
        let right = skeleton(&[Slot::Fixed('a'), Slot::Filled('c'), Slot::Fixed('e')]);
        let wrong = skeleton(&[Slot::Fixed('a'), Slot::Filled('x'), Slot::Fixed('e')]);

        assert!(is_complete(&right));
        assert!(is_correct(&right, "ace"));
        assert_eq!(current_word(&right).as_deref(), Some("ace"));

        assert!(is_complete(&wrong));
        assert!(!is_correct(&wrong, "ace"));
    }

    #[test]
    fn length_mismatch_is_incorrect() {
        let skeleton = WordSkeleton::from_slots(vec![Slot::Fixed('a'), Slot::Filled('c')]);

        assert!(!is_correct(&skeleton, "ace"));
        assert!(!is_correct(&skeleton, "a"));
    }
}
