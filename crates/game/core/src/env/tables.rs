//! Stat rows and weighted distributions that drive encounters.

use crate::state::CombatStats;

/// Identifier of a species-specific loot distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LootTableId(pub u8);

impl std::fmt::Display for LootTableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One species row: fully determines an enemy's stats.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesTemplate {
    pub name: String,
    pub stats: CombatStats,
    /// Percent chance of dropping loot under the species loot rule.
    pub drop_chance: u32,
    pub loot_table: LootTableId,
}

/// A count of one item granted when a player is created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingItem {
    pub item: String,
    pub count: u32,
}

impl StartingItem {
    pub fn new(item: impl Into<String>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }
}

/// Stat preset and starting kit for a player profession.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfessionPreset {
    pub name: String,
    pub stats: CombatStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_inventory: Vec<StartingItem>,
}

/// A named outcome with a relative integer frequency.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEntry {
    pub name: String,
    pub weight: u32,
}

impl WeightedEntry {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Weighted item distribution consulted when an enemy is defeated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootTable {
    pub id: LootTableId,
    pub entries: Vec<WeightedEntry>,
}

/// Loot distributions and the spawn distribution, as stored in `tables.ron`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterTables {
    pub spawn: Vec<WeightedEntry>,
    pub loot: Vec<LootTable>,
}

pub(crate) fn weights_of(entries: &[WeightedEntry]) -> Vec<u32> {
    entries.iter().map(|entry| entry.weight).collect()
}
