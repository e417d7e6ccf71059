//! Item catalog loader.

use std::path::Path;

use game_core::{ItemCatalog, ItemDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, load_ron, parse_ron};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an [`ItemCatalogFile`]
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalogFile = load_ron(path, "item catalog")?;
        Ok(ItemCatalog::new(catalog.items))
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalogFile = parse_ron(content, "item catalog")?;
        Ok(ItemCatalog::new(catalog.items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_in_order() {
        let catalog = ItemLoader::parse(
            r#"(items: [
                (name: "Herb", description: "Bitter.", heal: 2),
                (name: "Stone", description: "Just a stone.", heal: 0),
            ])"#,
        )
        .unwrap();
        let names: Vec<_> = catalog.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Herb", "Stone"]);
        assert_eq!(catalog.definition("Herb").map(|item| item.heal), Some(2));
    }
}
