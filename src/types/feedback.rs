use serde::{Deserialize, Serialize};

/// Outcome of comparing the spec sets of a guess and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecMatch {
    /// Identical as sets, including both empty.
    Correct,
    /// Not identical, but at least one spec in common.
    Partial,
    /// Disjoint.
    Incorrect,
}

/// Where the target's cooldown lies relative to the guess.
///
/// `Longer` reads as "the answer's cooldown is longer than your guess".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CooldownHint {
    Correct,
    Longer,
    Shorter,
}

/// Per-attribute scoring of one guess against the target.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub class: bool,
    pub spec: SpecMatch,
    pub school: bool,
    pub use_type: bool,
    pub cooldown: CooldownHint,
}

impl Feedback {
    /// Every attribute matches.
    ///
    /// This is attribute equivalence only and drives row colouring. Winning
    /// is decided by spell identity in the game session.
    pub fn is_full_match(&self) -> bool {
        self.class
            && self.spec == SpecMatch::Correct
            && self.school
            && self.use_type
            && self.cooldown == CooldownHint::Correct
    }
}
