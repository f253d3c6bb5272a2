use crate::spell::Spell;
use crate::types::{Locale, SpellId};

/// Spells whose localized name contains `query`, ignoring case.
///
/// Spells listed in `exclude` (typically the ones already guessed) are
/// skipped. Catalog order is preserved. A blank query matches nothing.
pub fn search<'a>(
    spells: &'a [Spell],
    query: &str,
    locale: Locale,
    exclude: &[SpellId],
) -> Vec<&'a Spell> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    spells
        .iter()
        .filter(|spell| !exclude.contains(&spell.id))
        .filter(|spell| spell.name(locale).to_lowercase().contains(&query))
        .collect()
}

/// The spell whose localized name equals `name`, ignoring case and
/// surrounding whitespace.
pub fn find_by_name<'a>(spells: &'a [Spell], name: &str, locale: Locale) -> Option<&'a Spell> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    spells
        .iter()
        .find(|spell| spell.name(locale).to_lowercase() == name)
}
