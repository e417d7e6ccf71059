//! Content loaders for reading game data from files.
//!
//! Every loader offers `load(path)` for files on disk and `parse(text)` for
//! embedded or in-memory sources. Content is deserialized straight into
//! `game-core` types; cross-table validation happens once, when
//! [`ContentFactory`] assembles the [`ContentTables`](game_core::ContentTables).

pub mod config;
pub mod factory;
pub mod item;
pub mod profession;
pub mod species;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::{ContentFactory, ContentPack};
pub use item::ItemLoader;
pub use profession::ProfessionLoader;
pub use species::SpeciesLoader;
pub use tables::TablesLoader;

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses RON text, naming `what` in the error.
pub(crate) fn parse_ron<T: DeserializeOwned>(content: &str, what: &str) -> LoadResult<T> {
    ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", what, e))
}

/// Reads and parses a RON file, attaching the path to any error.
pub(crate) fn load_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    parse_ron(&content, what).with_context(|| format!("in {}", path.display()))
}
