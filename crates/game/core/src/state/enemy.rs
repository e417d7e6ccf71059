use crate::env::{LootTableId, SpeciesTemplate};
use crate::state::Combatant;

/// A spawned foe, built entirely from one species row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub(crate) combatant: Combatant,
    drop_chance: u32,
    loot_table: LootTableId,
}

impl Enemy {
    pub fn from_template(template: &SpeciesTemplate) -> Self {
        Self {
            combatant: Combatant::new(template.name.clone(), template.stats),
            drop_chance: template.drop_chance,
            loot_table: template.loot_table,
        }
    }

    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn name(&self) -> &str {
        self.combatant.name()
    }

    pub fn drop_chance(&self) -> u32 {
        self.drop_chance
    }

    pub fn loot_table(&self) -> LootTableId {
        self.loot_table
    }
}
