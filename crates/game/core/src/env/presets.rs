//! Built-in forest content.
//!
//! Mirrors the `data/forest` pack shipped with `game-content`, so the game
//! and its tests run without a data directory.

use super::{
    ContentTables, EncounterTables, ItemCatalog, ItemDefinition, LootTable, LootTableId,
    ProfessionPreset, SpeciesTemplate, StartingItem, WeightedEntry,
};
use crate::state::CombatStats;

impl ContentTables {
    /// The classic dark-forest content: five species, three professions,
    /// apples and potions.
    pub fn forest() -> Self {
        let items = ItemCatalog::new(vec![
            ItemDefinition::new("Apple", "Eating heals the player by up to 1 health", 1),
            ItemDefinition::new("Potion", "Using heals the player by up to 3 health", 3),
        ]);

        let species = vec![
            species("Large Frog", CombatStats::new(4, 1, 0, 0, 10, 0), 20, 1),
            species("Goblin", CombatStats::new(2, 2, 0, 0, 0, 0), 20, 1),
            species("Wolf", CombatStats::new(2, 3, 0, 0, 0, 10), 30, 1),
            species("Ogre", CombatStats::new(4, 2, 1, 0, 0, 0), 40, 2),
            species("Troll", CombatStats::new(4, 3, 1, 10, 0, 0), 40, 2),
        ];

        let professions = vec![
            profession("Knight", CombatStats::new(16, 4, 2, 0, 0, 0), vec![]),
            profession("Rogue", CombatStats::new(10, 2, 0, 0, 20, 10), vec![]),
            profession(
                "Farmer",
                CombatStats::new(14, 3, 1, 0, 0, 0),
                vec![StartingItem::new("Apple", 3)],
            ),
        ];

        let tables = EncounterTables {
            spawn: vec![
                WeightedEntry::new("Large Frog", 30),
                WeightedEntry::new("Goblin", 30),
                WeightedEntry::new("Wolf", 20),
                WeightedEntry::new("Ogre", 10),
                WeightedEntry::new("Troll", 10),
            ],
            loot: vec![
                LootTable {
                    id: LootTableId(1),
                    entries: vec![WeightedEntry::new("Apple", 60), WeightedEntry::new("Potion", 40)],
                },
                LootTable {
                    id: LootTableId(2),
                    entries: vec![WeightedEntry::new("Apple", 20), WeightedEntry::new("Potion", 80)],
                },
            ],
        };

        match ContentTables::new(species, professions, items, tables) {
            Ok(content) => content,
            Err(err) => unreachable!("built-in forest content is invalid: {err}"),
        }
    }
}

fn species(name: &str, stats: CombatStats, drop_chance: u32, loot: u8) -> SpeciesTemplate {
    SpeciesTemplate {
        name: name.to_owned(),
        stats,
        drop_chance,
        loot_table: LootTableId(loot),
    }
}

fn profession(name: &str, stats: CombatStats, kit: Vec<StartingItem>) -> ProfessionPreset {
    ProfessionPreset {
        name: name.to_owned(),
        stats,
        starting_inventory: kit,
    }
}
