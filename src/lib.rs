//! Daily target selection and guess comparison for a spell guessing game.
//!
//! `spelldle-core` picks one target spell per calendar day without repeating
//! recent targets, scores guesses attribute by attribute (exact match,
//! spec-set overlap, cooldown direction) and tracks a player's guesses for
//! the day. Catalog and daily-record storage sit behind traits; in-memory
//! and JSON-file implementations are provided.

pub mod catalog;
pub mod comparison;
pub mod daily;
pub mod session;
pub mod spell;
pub mod types;
