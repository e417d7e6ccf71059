//! Spawn and loot distribution loader.

use std::path::Path;

use game_core::EncounterTables;

use crate::loaders::{LoadResult, load_ron, parse_ron};

/// Loader for [`EncounterTables`] from RON files.
///
/// The file holds the spawn distribution and every loot distribution; names
/// are checked against the species and item catalogs only when the content
/// is assembled.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<EncounterTables> {
        load_ron(path, "encounter tables")
    }

    pub fn parse(content: &str) -> LoadResult<EncounterTables> {
        parse_ron(content, "encounter tables")
    }
}
