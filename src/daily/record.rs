use serde::{Deserialize, Serialize};

use crate::types::{GameDate, SpellId};

/// Which spell was the target on a given day. One per date, never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: GameDate,
    pub spell_id: SpellId,
}

impl DailyRecord {
    pub fn new(date: GameDate, spell_id: SpellId) -> Self {
        Self { date, spell_id }
    }
}
