use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::text::SpellText;
use crate::types::{Locale, SpellId};

/// A catalog entry: the unit players guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: SpellId,
    pub translations: BTreeMap<Locale, SpellText>,
    /// Seconds. Shared by every locale.
    pub cooldown: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
}

impl Spell {
    pub fn new(id: u32, cooldown: u32) -> Self {
        Spell {
            id: SpellId::new(id),
            translations: BTreeMap::new(),
            cooldown,
            icon_path: None,
        }
    }

    pub fn with_translation(mut self, locale: Locale, text: SpellText) -> Self {
        self.translations.insert(locale, text);
        self
    }

    pub fn with_icon(mut self, path: impl Into<String>) -> Self {
        self.icon_path = Some(path.into());
        self
    }

    /// Text for `locale`, or the "Unknown" placeholder when the spell has no
    /// translation for it. Never fails.
    pub fn text(&self, locale: Locale) -> Cow<'_, SpellText> {
        match self.translations.get(&locale) {
            Some(text) => Cow::Borrowed(text),
            None => {
                debug!(spell_id = %self.id, %locale, "Translation missing for spell");
                Cow::Owned(SpellText::unknown())
            }
        }
    }

    /// Supported locales this spell has no text for.
    pub fn missing_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| !self.translations.contains_key(locale))
            .collect()
    }

    pub fn name(&self, locale: Locale) -> Cow<'_, str> {
        match self.text(locale) {
            Cow::Borrowed(text) => Cow::Borrowed(text.name.as_str()),
            Cow::Owned(text) => Cow::Owned(text.name),
        }
    }
}
