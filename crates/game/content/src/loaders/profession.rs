//! Player profession loader.

use std::path::Path;

use game_core::ProfessionPreset;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, load_ron, parse_ron};

/// Profession list structure for RON files.
///
/// Order is preserved; it is the order offered to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionCatalog {
    pub professions: Vec<ProfessionPreset>,
}

/// Loader for profession presets from RON files.
pub struct ProfessionLoader;

impl ProfessionLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ProfessionPreset>> {
        let catalog: ProfessionCatalog = load_ron(path, "profession list")?;
        Ok(catalog.professions)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ProfessionPreset>> {
        let catalog: ProfessionCatalog = parse_ron(content, "profession list")?;
        Ok(catalog.professions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_inventory_defaults_to_empty() {
        let presets = ProfessionLoader::parse(
            r#"(professions: [
                (name: "Monk", stats: (health: 9, strength: 2, armor: 0, block_chance: 5, dodge_chance: 5, crit_chance: 5)),
                (name: "Baker", stats: (health: 9, strength: 1, armor: 0, block_chance: 0, dodge_chance: 0, crit_chance: 0),
                 starting_inventory: [(item: "Bread", count: 2)]),
            ])"#,
        )
        .unwrap();
        assert_eq!(presets[0].name, "Monk");
        assert!(presets[0].starting_inventory.is_empty());
        assert_eq!(presets[1].starting_inventory[0].item, "Bread");
        assert_eq!(presets[1].starting_inventory[0].count, 2);
    }
}
