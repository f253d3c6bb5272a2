use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::comparison::compare;
use crate::spell::Spell;
use crate::types::{Feedback, Locale, SessionError, SpellId};

/// One submitted guess. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRecord {
    pub spell: Spell,
    pub feedback: Feedback,
    /// 1-based, increases by one per submission.
    pub attempt_number: u32,
}

/// The player's guesses for today's target.
///
/// Attempt count and win state are derived from the log on every call,
/// never stored alongside it.
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Spell,
    guesses: Vec<GuessRecord>,
}

impl GameSession {
    pub fn new(target: Spell) -> Self {
        Self {
            target,
            guesses: Vec::new(),
        }
    }

    pub fn target(&self) -> &Spell {
        &self.target
    }

    /// Score `candidate` against the target and append it to the log.
    ///
    /// `candidate` is `None` when the player's input did not resolve to a
    /// catalog spell. There is no attempt limit.
    pub fn submit_guess(
        &mut self,
        candidate: Option<&Spell>,
        locale: Locale,
    ) -> Result<&GuessRecord, SessionError> {
        let spell = candidate.ok_or(SessionError::InvalidCandidate)?;

        let feedback = compare(spell, &self.target, locale);
        let attempt_number = self.attempt_count().saturating_add(1);

        debug!(spell_id = %spell.id, attempt_number, "Guess submitted");

        self.guesses.push(GuessRecord {
            spell: spell.clone(),
            feedback,
            attempt_number,
        });

        self.guesses.last().ok_or(SessionError::InvalidCandidate)
    }

    /// Clear the guess log. The target is kept: a new round on the same day
    /// replays the same puzzle.
    pub fn reset(&mut self) {
        self.guesses.clear();
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    pub fn attempt_count(&self) -> u32 {
        u32::try_from(self.guesses.len()).unwrap_or(u32::MAX)
    }

    /// Won only by guessing the target spell itself. A different spell with
    /// identical attributes does not count.
    pub fn has_won(&self) -> bool {
        self.has_guessed(self.target.id)
    }

    pub fn has_guessed(&self, id: SpellId) -> bool {
        self.guesses.iter().any(|guess| guess.spell.id == id)
    }

    /// Ids already guessed, in submission order. Feeds search exclusion.
    pub fn guessed_ids(&self) -> Vec<SpellId> {
        self.guesses.iter().map(|guess| guess.spell.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returned_record_is_the_last_logged_guess() {
        let target = Spell::new(1, 0);
        let mut session = GameSession::new(target.clone());
        session.submit_guess(Some(&Spell::new(2, 0)), Locale::En).unwrap();

        let returned = session.submit_guess(Some(&target), Locale::En).unwrap().clone();

        assert_eq!(returned.attempt_number, 2);
        assert_eq!(session.guesses().last(), Some(&returned));
    }
}
