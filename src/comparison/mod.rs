pub mod rules;

use crate::spell::Spell;
use crate::types::{Feedback, Locale};
pub use rules::{compare_cooldown, compare_specs};

/// Score `guess` against `target`, attribute by attribute.
///
/// Both sides are read through the same `locale`; a missing translation
/// compares as the "Unknown" placeholder rather than failing.
pub fn compare(guess: &Spell, target: &Spell, locale: Locale) -> Feedback {
    let guessed = guess.text(locale);
    let expected = target.text(locale);

    Feedback {
        class: guessed.class == expected.class,
        spec: compare_specs(&guessed.spec, &expected.spec),
        school: guessed.school == expected.school,
        use_type: guessed.use_type == expected.use_type,
        cooldown: compare_cooldown(guess.cooldown, target.cooldown),
    }
}
