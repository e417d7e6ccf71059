//! Content factory for assembling validated content from data files.

use std::path::{Path, PathBuf};

use game_core::{
    ContentTables, EncounterTables, GameConfig, ItemCatalog, ProfessionPreset, SpeciesTemplate,
};

use crate::loaders::{
    ConfigLoader, ItemLoader, LoadResult, ProfessionLoader, SpeciesLoader, TablesLoader,
};

const FOREST_SPECIES: &str = include_str!("../../data/forest/species.ron");
const FOREST_PROFESSIONS: &str = include_str!("../../data/forest/professions.ron");
const FOREST_ITEMS: &str = include_str!("../../data/forest/items.ron");
const FOREST_TABLES: &str = include_str!("../../data/forest/tables.ron");
const FOREST_CONFIG: &str = include_str!("../../data/forest/config.toml");

/// Everything a game session needs from content: validated tables and the
/// tunables.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentPack {
    pub tables: ContentTables,
    pub config: GameConfig,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml       (optional)
/// ├── species.ron
/// ├── professions.ron
/// ├── items.ron
/// └── tables.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The forest pack compiled into the binary.
    pub fn builtin() -> LoadResult<ContentPack> {
        let tables = assemble(
            SpeciesLoader::parse(FOREST_SPECIES)?,
            ProfessionLoader::parse(FOREST_PROFESSIONS)?,
            ItemLoader::parse(FOREST_ITEMS)?,
            TablesLoader::parse(FOREST_TABLES)?,
        )?;
        let config = ConfigLoader::parse(FOREST_CONFIG)?;
        Ok(ContentPack { tables, config })
    }

    /// Loads and validates every file in the data directory.
    pub fn load(&self) -> LoadResult<ContentPack> {
        let tables = assemble(
            self.load_species()?,
            self.load_professions()?,
            self.load_items()?,
            self.load_tables()?,
        )?;
        let config = self.load_config()?;
        Ok(ContentPack { tables, config })
    }

    /// Load game configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    /// Load enemy rows from `species.ron`.
    pub fn load_species(&self) -> LoadResult<Vec<SpeciesTemplate>> {
        SpeciesLoader::load(&self.data_dir.join("species.ron"))
    }

    /// Load profession presets from `professions.ron`.
    pub fn load_professions(&self) -> LoadResult<Vec<ProfessionPreset>> {
        ProfessionLoader::load(&self.data_dir.join("professions.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load spawn and loot distributions from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<EncounterTables> {
        TablesLoader::load(&self.data_dir.join("tables.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn assemble(
    species: Vec<SpeciesTemplate>,
    professions: Vec<ProfessionPreset>,
    items: ItemCatalog,
    tables: EncounterTables,
) -> LoadResult<ContentTables> {
    Ok(ContentTables::new(species, professions, items, tables)?)
}
