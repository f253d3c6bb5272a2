use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::types::{CooldownHint, SpecMatch};

/// Set comparison of spec lists. Order and repeats are ignored.
pub fn compare_specs<S: AsRef<str>>(guessed: &[S], target: &[S]) -> SpecMatch {
    let guessed: BTreeSet<&str> = guessed.iter().map(AsRef::as_ref).collect();
    let target: BTreeSet<&str> = target.iter().map(AsRef::as_ref).collect();

    if guessed == target {
        SpecMatch::Correct
    } else if !guessed.is_disjoint(&target) {
        SpecMatch::Partial
    } else {
        SpecMatch::Incorrect
    }
}

/// Direction from the guessed cooldown to the target's.
pub fn compare_cooldown(guessed: u32, target: u32) -> CooldownHint {
    match target.cmp(&guessed) {
        Ordering::Equal => CooldownHint::Correct,
        Ordering::Greater => CooldownHint::Longer,
        Ordering::Less => CooldownHint::Shorter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn specs_identical_in_any_order_are_correct() {
        assert_eq!(compare_specs(&["Fire", "Frost"], &["Frost", "Fire"]), SpecMatch::Correct);
        assert_eq!(compare_specs(&NONE, &NONE), SpecMatch::Correct);
    }

    #[test]
    fn specs_overlapping_are_partial() {
        assert_eq!(compare_specs(&["Fire"], &["Fire", "Frost"]), SpecMatch::Partial);
        assert_eq!(compare_specs(&["Fire", "Arcane"], &["Fire"]), SpecMatch::Partial);
    }

    #[test]
    fn specs_disjoint_are_incorrect() {
        assert_eq!(compare_specs(&["Fire"], &["Frost"]), SpecMatch::Incorrect);
        assert_eq!(compare_specs(&NONE, &["Frost"]), SpecMatch::Incorrect);
        assert_eq!(compare_specs(&["Fire"], &NONE), SpecMatch::Incorrect);
    }

    #[test]
    fn repeated_specs_do_not_change_the_set() {
        assert_eq!(compare_specs(&["Fire", "Fire"], &["Fire"]), SpecMatch::Correct);
    }

    #[test]
    fn cooldown_reports_target_relative_to_guess() {
        assert_eq!(compare_cooldown(8, 12), CooldownHint::Longer);
        assert_eq!(compare_cooldown(12, 8), CooldownHint::Shorter);
        assert_eq!(compare_cooldown(0, 0), CooldownHint::Correct);
    }
}
