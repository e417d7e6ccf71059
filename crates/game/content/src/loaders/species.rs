//! Enemy species loader.

use std::path::Path;

use game_core::SpeciesTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, load_ron, parse_ron};

/// Species table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    pub species: Vec<SpeciesTemplate>,
}

/// Loader for enemy species rows from RON files.
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load species rows from a RON file containing a [`SpeciesCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<SpeciesTemplate>> {
        let catalog: SpeciesCatalog = load_ron(path, "species table")?;
        Ok(catalog.species)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<SpeciesTemplate>> {
        let catalog: SpeciesCatalog = parse_ron(content, "species table")?;
        Ok(catalog.species)
    }
}
