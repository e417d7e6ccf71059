/// Rule used to decide whether a defeated enemy leaves an item behind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LootRoll {
    /// Loot when a percent draw exceeds [`GameConfig::loot_threshold`].
    #[default]
    Coin,
    /// Loot when a percent draw falls below the species' drop chance.
    Species,
}

/// Game configuration constants and tunable parameters.
///
/// Defaults reproduce the classic forest rules; a `config.toml` may override
/// any subset of fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Health restored by one `rest` from the tired state.
    pub rest_heal: i32,
    /// Upper bound (inclusive) of the random bonus added to strength.
    pub damage_variance: u32,
    /// Damage multiplier applied on a critical strike.
    pub crit_multiplier: u32,
    pub loot_roll: LootRoll,
    /// Percent draw must be strictly greater than this for [`LootRoll::Coin`].
    pub loot_threshold: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REST_HEAL: i32 = 1;
    pub const DEFAULT_DAMAGE_VARIANCE: u32 = 2;
    pub const DEFAULT_CRIT_MULTIPLIER: u32 = 2;
    pub const DEFAULT_LOOT_THRESHOLD: u32 = 50;

    pub fn new() -> Self {
        Self {
            rest_heal: Self::DEFAULT_REST_HEAL,
            damage_variance: Self::DEFAULT_DAMAGE_VARIANCE,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            loot_roll: LootRoll::default(),
            loot_threshold: Self::DEFAULT_LOOT_THRESHOLD,
        }
    }

    /// Returns true when a percent draw should produce loot for an enemy
    /// with the given drop chance.
    pub fn loot_triggers(&self, roll: u32, drop_chance: u32) -> bool {
        match self.loot_roll {
            LootRoll::Coin => roll > self.loot_threshold,
            LootRoll::Species => roll < drop_chance,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_roll_uses_strict_threshold() {
        let config = GameConfig::default();
        assert!(!config.loot_triggers(50, 100));
        assert!(config.loot_triggers(51, 0));
    }

    #[test]
    fn species_roll_uses_drop_chance() {
        let config = GameConfig {
            loot_roll: LootRoll::Species,
            ..GameConfig::default()
        };
        assert!(config.loot_triggers(19, 20));
        assert!(!config.loot_triggers(20, 20));
    }
}
