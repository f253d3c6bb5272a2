// Read-only from the engine's point of view:
// no mutation
// no "update" methods

use std::path::Path;

use tracing::warn;

use crate::spell::Spell;
use crate::types::{SpellId, StoreError};

/// Source of every guessable spell.
pub trait Catalog {
    fn list_spells(&self) -> Result<Vec<Spell>, StoreError>;

    fn get_spell(&self, id: SpellId) -> Result<Option<Spell>, StoreError>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn list_spells(&self) -> Result<Vec<Spell>, StoreError> {
        (**self).list_spells()
    }

    fn get_spell(&self, id: SpellId) -> Result<Option<Spell>, StoreError> {
        (**self).get_spell(id)
    }
}

/// A catalog held entirely in memory, sorted by spell id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    spells: Vec<Spell>,
}

impl InMemoryCatalog {
    pub fn new(spells: Vec<Spell>) -> Result<Self, StoreError> {
        let mut sorted = spells;
        sorted.sort_by_key(|spell| spell.id);

        // Duplicates are adjacent after sort
        for pair in sorted.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(StoreError::DuplicateSpellId(pair[0].id));
            }
        }

        // Reported once here; per-lookup fallbacks only log at debug
        for spell in &sorted {
            let missing = spell.missing_locales();
            if !missing.is_empty() {
                warn!(spell_id = %spell.id, ?missing, "Spell lacks translations, text will show as Unknown");
            }
        }

        Ok(Self { spells: sorted })
    }

    /// Load a JSON array of spells.
    pub fn load_json(path: &Path) -> Result<Self, StoreError> {
        let f = std::fs::File::open(path)?;
        let spells: Vec<Spell> = serde_json::from_reader(std::io::BufReader::new(f))?;
        Self::new(spells)
    }

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn list_spells(&self) -> Result<Vec<Spell>, StoreError> {
        Ok(self.spells.clone())
    }

    fn get_spell(&self, id: SpellId) -> Result<Option<Spell>, StoreError> {
        Ok(self
            .spells
            .binary_search_by_key(&id, |spell| spell.id)
            .ok()
            .map(|idx| self.spells[idx].clone()))
    }
}
