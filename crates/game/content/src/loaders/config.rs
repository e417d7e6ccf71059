//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<GameConfig> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(GameConfig::default())
        }
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::LootRoll;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("rest_heal = 2\nloot_roll = \"species\"\n").unwrap();
        assert_eq!(config.rest_heal, 2);
        assert_eq!(config.loot_roll, LootRoll::Species);
        assert_eq!(config.damage_variance, GameConfig::DEFAULT_DAMAGE_VARIANCE);
        assert_eq!(config.loot_threshold, GameConfig::DEFAULT_LOOT_THRESHOLD);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn unknown_loot_rule_is_rejected() {
        assert!(ConfigLoader::parse("loot_roll = \"dice\"").is_err());
    }
}
