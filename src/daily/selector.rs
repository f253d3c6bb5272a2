use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use super::config::SelectionConfig;
use super::record::DailyRecord;
use super::store::DailyRecordStore;
use crate::catalog::Catalog;
use crate::spell::Spell;
use crate::types::{GameDate, SelectionError, SpellId};

/// Picks one target spell per calendar day.
///
/// A day that already has a record always resolves to that record's spell.
/// Otherwise a spell is drawn uniformly from those not used in the trailing
/// window and recorded. Store failures never reach the player: reads degrade
/// to "nothing recorded" and a failed write still returns the drawn spell.
///
/// The read-then-append sequence is not atomic. Two callers racing on an
/// unrecorded day may draw different spells; whichever append lands first is
/// what the store returns to both, so they converge once persistence
/// succeeds. If it never succeeds, each cold call may draw again.
pub struct DailySelector<C, S> {
    catalog: C,
    store: S,
    config: SelectionConfig,
}

impl<C, S> DailySelector<C, S>
where
    C: Catalog,
    S: DailyRecordStore,
{
    pub fn new(catalog: C, store: S, config: SelectionConfig) -> Self {
        Self {
            catalog,
            store,
            config,
        }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Target for the local calendar day.
    pub fn select_today(&self) -> Result<Spell, SelectionError> {
        self.select_target(GameDate::today())
    }

    pub fn select_target(&self, today: GameDate) -> Result<Spell, SelectionError> {
        self.select_target_with_rng(today, &mut rand::thread_rng())
    }

    pub fn select_target_with_rng<R: Rng + ?Sized>(
        &self,
        today: GameDate,
        rng: &mut R,
    ) -> Result<Spell, SelectionError> {
        // 1. An existing record wins
        match self.store.record_for(today) {
            Ok(Some(record)) => {
                debug!(date = %today, spell_id = %record.spell_id, "Using recorded daily spell");
                return self.resolve(record.spell_id);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(date = %today, error = %e, "Failed to read daily record, selecting a new spell");
            }
        }

        // 2. Draw outside the no-repeat window
        let spells = self.load_catalog();
        if spells.is_empty() {
            return Err(SelectionError::EmptyCatalog);
        }

        let recent = self.recent_spell_ids(today);
        let available: Vec<&Spell> = spells
            .iter()
            .filter(|spell| !recent.contains(&spell.id))
            .collect();

        let drawn = if available.is_empty() {
            warn!(
                date = %today,
                window_days = self.config.no_repeat_days,
                catalog_size = spells.len(),
                "Every spell was used in the no-repeat window, drawing from the full catalog"
            );
            spells.choose(rng)
        } else {
            available.choose(rng).copied()
        };
        let chosen = drawn.ok_or(SelectionError::EmptyCatalog)?.clone();

        // 3. Persist, best effort
        match self.store.append(DailyRecord::new(today, chosen.id)) {
            Ok(stored) if stored.spell_id != chosen.id => {
                info!(
                    date = %today,
                    drawn = %chosen.id,
                    stored = %stored.spell_id,
                    "Daily record already created elsewhere, adopting it"
                );
                spells
                    .into_iter()
                    .find(|spell| spell.id == stored.spell_id)
                    .ok_or(SelectionError::NotFound(stored.spell_id))
            }
            Ok(_) => {
                info!(date = %today, spell_id = %chosen.id, "Selected new daily spell");
                Ok(chosen)
            }
            Err(e) => {
                warn!(date = %today, spell_id = %chosen.id, error = %e, "Failed to save daily spell");
                Ok(chosen)
            }
        }
    }

    /// Ids of the targets recorded for the `no_repeat_days` days strictly
    /// before `today`.
    pub fn recent_spell_ids(&self, today: GameDate) -> BTreeSet<SpellId> {
        let window: BTreeSet<GameDate> = (1..=self.config.no_repeat_days)
            .filter_map(|days| today.days_before(days))
            .collect();

        if window.is_empty() {
            return BTreeSet::new();
        }

        match self.store.list_records() {
            Ok(records) => records
                .into_iter()
                .filter(|record| window.contains(&record.date))
                .map(|record| record.spell_id)
                .collect(),
            Err(e) => {
                warn!(date = %today, error = %e, "Failed to read daily history, ignoring no-repeat window");
                BTreeSet::new()
            }
        }
    }

    fn load_catalog(&self) -> Vec<Spell> {
        self.catalog.list_spells().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to fetch spell catalog");
            Vec::new()
        })
    }

    fn resolve(&self, id: SpellId) -> Result<Spell, SelectionError> {
        match self.catalog.get_spell(id) {
            Ok(Some(spell)) => Ok(spell),
            Ok(None) => Err(SelectionError::NotFound(id)),
            Err(e) => {
                warn!(spell_id = %id, error = %e, "Failed to fetch spell, searching full catalog");
                let spells = self.load_catalog();
                if spells.is_empty() {
                    return Err(SelectionError::EmptyCatalog);
                }
                spells
                    .into_iter()
                    .find(|spell| spell.id == id)
                    .ok_or(SelectionError::NotFound(id))
            }
        }
    }
}
