//! Read-only content and the random source.
//!
//! [`ContentTables`] bundles species rows, profession presets, the item
//! catalog, and the weighted spawn/loot distributions. It is validated once at
//! construction and never mutated afterwards. The [`Env`] aggregate hands the
//! engine everything it needs for one operation: tables, tunables, and the
//! [`RngOracle`] to draw from.
mod error;
mod items;
mod presets;
mod rng;
mod tables;

pub use error::ContentError;
pub use items::{ItemCatalog, ItemDefinition};
pub use rng::{RngOracle, ScriptedRng, SeededRng, weighted_choice, weighted_index};
pub use tables::{
    EncounterTables, LootTable, LootTableId, ProfessionPreset, SpeciesTemplate, StartingItem,
    WeightedEntry,
};

use std::collections::HashSet;

use crate::config::GameConfig;
use crate::state::CombatStats;
use tables::weights_of;

/// Validated, immutable game content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentTables {
    species: Vec<SpeciesTemplate>,
    professions: Vec<ProfessionPreset>,
    items: ItemCatalog,
    tables: EncounterTables,
    // Spawn distribution resolved to species indices.
    spawn_species: Vec<usize>,
    spawn_weights: Vec<u32>,
}

impl ContentTables {
    /// Assembles content, checking every cross reference.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] for duplicate names, dangling references,
    /// empty or overflowing distributions, out-of-range chances, or
    /// non-positive health.
    pub fn new(
        species: Vec<SpeciesTemplate>,
        professions: Vec<ProfessionPreset>,
        items: ItemCatalog,
        tables: EncounterTables,
    ) -> Result<Self, ContentError> {
        ensure_unique("item", items.iter().map(|item| item.name.as_str()))?;
        ensure_unique("species", species.iter().map(|row| row.name.as_str()))?;
        ensure_unique(
            "profession",
            professions.iter().map(|preset| preset.name.as_str()),
        )?;

        let mut loot_ids = HashSet::new();
        for table in &tables.loot {
            let owner = format!("loot table {}", table.id);
            if !loot_ids.insert(table.id) {
                return Err(ContentError::DuplicateName {
                    kind: "loot table",
                    name: table.id.to_string(),
                });
            }
            for entry in &table.entries {
                if !items.contains(&entry.name) {
                    return Err(ContentError::UnknownItem {
                        owner,
                        item: entry.name.clone(),
                    });
                }
            }
            ensure_weighted(&owner, &table.entries)?;
        }

        for row in &species {
            check_stats(&row.name, &row.stats)?;
            check_chance(&row.name, "drop chance", row.drop_chance)?;
            if !loot_ids.contains(&row.loot_table) {
                return Err(ContentError::UnknownLootTable {
                    species: row.name.clone(),
                    id: row.loot_table,
                });
            }
        }

        if professions.is_empty() {
            return Err(ContentError::NoProfessions);
        }
        for preset in &professions {
            check_stats(&preset.name, &preset.stats)?;
            for kit in &preset.starting_inventory {
                if !items.contains(&kit.item) {
                    return Err(ContentError::UnknownItem {
                        owner: format!("profession {}", preset.name),
                        item: kit.item.clone(),
                    });
                }
            }
        }

        ensure_weighted("spawn table", &tables.spawn)?;
        let mut spawn_species = Vec::with_capacity(tables.spawn.len());
        for entry in &tables.spawn {
            let index = species
                .iter()
                .position(|row| row.name == entry.name)
                .ok_or_else(|| ContentError::UnknownSpecies(entry.name.clone()))?;
            spawn_species.push(index);
        }
        let spawn_weights = weights_of(&tables.spawn);

        Ok(Self {
            species,
            professions,
            items,
            tables,
            spawn_species,
            spawn_weights,
        })
    }

    pub fn species(&self, name: &str) -> Option<&SpeciesTemplate> {
        self.species.iter().find(|row| row.name == name)
    }

    pub fn all_species(&self) -> &[SpeciesTemplate] {
        &self.species
    }

    pub fn profession(&self, name: &str) -> Option<&ProfessionPreset> {
        self.professions.iter().find(|preset| preset.name == name)
    }

    /// Profession names in table order, for prompts.
    pub fn profession_names(&self) -> impl Iterator<Item = &str> {
        self.professions.iter().map(|preset| preset.name.as_str())
    }

    pub fn item(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.definition(name)
    }

    pub fn loot_table(&self, id: LootTableId) -> Option<&LootTable> {
        self.tables.loot.iter().find(|table| table.id == id)
    }

    /// Picks a species from the spawn distribution.
    pub fn roll_species(&self, rng: &mut (impl RngOracle + ?Sized)) -> &SpeciesTemplate {
        // Construction guarantees a non-empty spawn table with positive weight.
        let pick = weighted_index(&self.spawn_weights, rng).unwrap_or_default();
        &self.species[self.spawn_species[pick]]
    }

    /// Picks an item from the given loot distribution.
    ///
    /// Returns `None` when no table has that id.
    pub fn roll_loot(
        &self,
        id: LootTableId,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Option<&ItemDefinition> {
        let table = self.loot_table(id)?;
        let entry = weighted_choice(&table.entries, &weights_of(&table.entries), rng)?;
        self.items.definition(&entry.name)
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ContentError::DuplicateName {
                kind,
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

fn ensure_weighted(owner: &str, entries: &[WeightedEntry]) -> Result<(), ContentError> {
    if entries.iter().all(|entry| entry.weight == 0) {
        return Err(ContentError::EmptyDistribution(owner.to_owned()));
    }
    if rng::total_weight(&weights_of(entries)).is_none() {
        return Err(ContentError::WeightOverflow(owner.to_owned()));
    }
    Ok(())
}

fn check_chance(owner: &str, field: &'static str, value: u32) -> Result<(), ContentError> {
    if value > 100 {
        return Err(ContentError::ChanceOutOfRange {
            owner: owner.to_owned(),
            field,
            value,
        });
    }
    Ok(())
}

fn check_stats(owner: &str, stats: &CombatStats) -> Result<(), ContentError> {
    if stats.health <= 0 {
        return Err(ContentError::NonPositiveHealth(owner.to_owned()));
    }
    check_chance(owner, "block chance", stats.block_chance)?;
    check_chance(owner, "dodge chance", stats.dodge_chance)?;
    check_chance(owner, "crit chance", stats.crit_chance)
}

/// Everything one engine operation may consult.
pub struct Env<'a> {
    tables: &'a ContentTables,
    config: &'a GameConfig,
    rng: &'a mut dyn RngOracle,
}

impl<'a> Env<'a> {
    pub fn new(
        tables: &'a ContentTables,
        config: &'a GameConfig,
        rng: &'a mut dyn RngOracle,
    ) -> Self {
        Self {
            tables,
            config,
            rng,
        }
    }

    pub fn tables(&self) -> &'a ContentTables {
        self.tables
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&mut self) -> &mut dyn RngOracle {
        &mut *self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn parts() -> (
        Vec<SpeciesTemplate>,
        Vec<ProfessionPreset>,
        ItemCatalog,
        EncounterTables,
    ) {
        let forest = ContentTables::forest();
        (
            forest.species.clone(),
            forest.professions.clone(),
            forest.items.clone(),
            forest.tables.clone(),
        )
    }

    #[test]
    fn forest_content_is_valid() {
        let (species, professions, items, tables) = parts();
        let rebuilt = ContentTables::new(species, professions, items, tables).unwrap();
        assert_eq!(rebuilt, ContentTables::forest());
        assert_eq!(rebuilt.all_species().len(), 5);
        assert_eq!(
            rebuilt.profession_names().collect::<Vec<_>>(),
            ["Knight", "Rogue", "Farmer"]
        );
    }

    #[test]
    fn rejects_unknown_spawn_species() {
        let (species, professions, items, mut tables) = parts();
        tables.spawn.push(WeightedEntry::new("Dragon", 5));
        let err = ContentTables::new(species, professions, items, tables).unwrap_err();
        assert_eq!(err, ContentError::UnknownSpecies("Dragon".into()));
        assert_eq!(err.error_code(), "CONTENT_UNKNOWN_SPECIES");
    }

    #[test]
    fn rejects_unknown_loot_item() {
        let (species, professions, items, mut tables) = parts();
        tables.loot[0].entries.push(WeightedEntry::new("Sword", 1));
        let err = ContentTables::new(species, professions, items, tables).unwrap_err();
        assert!(matches!(err, ContentError::UnknownItem { item, .. } if item == "Sword"));
    }

    #[test]
    fn rejects_dangling_loot_table() {
        let (mut species, professions, items, tables) = parts();
        species[0].loot_table = LootTableId(9);
        let err = ContentTables::new(species, professions, items, tables).unwrap_err();
        assert!(matches!(err, ContentError::UnknownLootTable { .. }));
    }

    #[test]
    fn rejects_all_zero_spawn_weights() {
        let (species, professions, items, mut tables) = parts();
        for entry in &mut tables.spawn {
            entry.weight = 0;
        }
        let err = ContentTables::new(species, professions, items, tables).unwrap_err();
        assert_eq!(err, ContentError::EmptyDistribution("spawn table".into()));
    }

    #[test]
    fn rejects_spawn_weights_past_u32() {
        let (species, professions, items, mut tables) = parts();
        tables.spawn[0].weight = u32::MAX;
        let err = ContentTables::new(species, professions, items, tables).unwrap_err();
        assert_eq!(err, ContentError::WeightOverflow("spawn table".into()));
        assert_eq!(err.error_code(), "CONTENT_WEIGHT_OVERFLOW");
    }

    #[test]
    fn rejects_loot_weights_past_u32() {
        let (species, professions, items, mut tables) = parts();
        tables.loot[1].entries[0].weight = u32::MAX;
        let err = ContentTables::new(species, professions, items, tables).unwrap_err();
        assert_eq!(err, ContentError::WeightOverflow("loot table #2".into()));
    }

    #[test]
    fn rejects_out_of_range_chance() {
        let (species, mut professions, items, tables) = parts();
        professions[1].stats.dodge_chance = 101;
        let err = ContentTables::new(species, professions, items, tables).unwrap_err();
        assert!(matches!(err, ContentError::ChanceOutOfRange { value: 101, .. }));
    }

    #[test]
    fn rejects_duplicate_species() {
        let (mut species, professions, items, tables) = parts();
        species.push(species[0].clone());
        let err = ContentTables::new(species, professions, items, tables).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateName { kind: "species", .. }));
    }

    #[test]
    fn roll_species_follows_spawn_weights() {
        let forest = ContentTables::forest();
        let mut rng = ScriptedRng::new([0, 30, 60, 80, 99]);
        let names: Vec<_> = (0..5)
            .map(|_| forest.roll_species(&mut rng).name.clone())
            .collect();
        assert_eq!(names, ["Large Frog", "Goblin", "Wolf", "Ogre", "Troll"]);
    }

    #[test]
    fn roll_loot_uses_species_table() {
        let forest = ContentTables::forest();
        let mut rng = ScriptedRng::new([59, 60, 19, 20]);
        let pick = |rng: &mut ScriptedRng, id| {
            forest.roll_loot(LootTableId(id), rng).unwrap().name.clone()
        };
        assert_eq!(pick(&mut rng, 1), "Apple");
        assert_eq!(pick(&mut rng, 1), "Potion");
        assert_eq!(pick(&mut rng, 2), "Apple");
        assert_eq!(pick(&mut rng, 2), "Potion");
        assert!(forest.roll_loot(LootTableId(7), &mut rng).is_none());
    }
}
