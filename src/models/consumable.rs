//! Demo record type: a consumable item.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// A consumable item with stat bonuses.
///
/// The wire representation uses camelCase field names:
///
/// ```json
/// {"id": "HealthPotion", "healthGain": 10, "manaGain": 0, "staminaGain": 0}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumable {
    /// Unique identifier, e.g. `"HealthPotion"`.
    pub id: RecordId,
    /// Health restored on use.
    pub health_gain: i32,
    /// Mana restored on use.
    pub mana_gain: i32,
    /// Stamina restored on use.
    pub stamina_gain: i32,
}

impl Consumable {
    /// Creates a new consumable.
    #[must_use]
    pub fn new(id: impl Into<RecordId>, health_gain: i32, mana_gain: i32, stamina_gain: i32) -> Self {
        Self {
            id: id.into(),
            health_gain,
            mana_gain,
            stamina_gain,
        }
    }
}

impl Record for Consumable {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
