//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Enemy species rows (RON)
//! - Player professions and starting kits (RON)
//! - Item catalog (RON)
//! - Spawn and loot distributions (RON)
//! - Game configuration (TOML)
//!
//! The classic forest pack under `data/forest` is also compiled in and
//! available through [`ContentFactory::builtin`].
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ContentPack, ItemLoader, LoadResult, ProfessionLoader,
    SpeciesLoader, TablesLoader,
};
