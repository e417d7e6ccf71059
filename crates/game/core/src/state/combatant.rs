//! Shared statistical representation for anything that can fight.

/// Fixed combat statistics, set at creation from a species row or a
/// profession preset and never changed afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    /// Maximum (and starting) health.
    pub health: i32,
    /// Base damage of every attack.
    pub strength: u32,
    /// Flat reduction applied to every incoming hit.
    pub armor: u32,
    /// Percent threshold for negating a hit outright.
    pub block_chance: u32,
    /// Percent threshold checked against the same roll after block.
    pub dodge_chance: u32,
    /// Percent threshold for a critical strike.
    pub crit_chance: u32,
}

impl CombatStats {
    pub const fn new(
        health: i32,
        strength: u32,
        armor: u32,
        block_chance: u32,
        dodge_chance: u32,
        crit_chance: u32,
    ) -> Self {
        Self {
            health,
            strength,
            armor,
            block_chance,
            dodge_chance,
            crit_chance,
        }
    }
}

/// A named fighter with current health.
///
/// Health starts at the maximum and never rises above it. It may drop below
/// zero after a heavy hit; any value `<= 0` counts as defeated and
/// [`Combatant::display_health`] clamps it for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    health: i32,
    stats: CombatStats,
}

impl Combatant {
    pub fn new(name: impl Into<String>, stats: CombatStats) -> Self {
        Self {
            name: name.into(),
            health: stats.health,
            stats,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw health, possibly negative after an overkill hit.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Health clamped at zero for presentation.
    pub fn display_health(&self) -> i32 {
        self.health.max(0)
    }

    pub fn health_max(&self) -> i32 {
        self.stats.health
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Restores up to `amount` health without exceeding the maximum.
    ///
    /// Returns the health actually gained.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        if self.health < self.stats.health {
            self.health = self.health.saturating_add(amount.max(0)).min(self.stats.health);
        }
        self.health - before
    }

    /// Subtracts already-mitigated damage.
    pub(crate) fn take_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(amount);
    }

    /// Drops health to zero, as when the player leaves the forest.
    pub(crate) fn knock_out(&mut self) {
        self.health = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Combatant {
        Combatant::new("Ada", CombatStats::new(16, 4, 2, 0, 0, 0))
    }

    #[test]
    fn starts_at_full_health() {
        let fighter = knight();
        assert_eq!(fighter.health(), 16);
        assert_eq!(fighter.health_max(), 16);
        assert!(!fighter.is_defeated());
    }

    #[test]
    fn heal_is_capped_at_maximum() {
        let mut fighter = knight();
        fighter.take_damage(5);
        assert_eq!(fighter.heal(3), 3);
        assert_eq!(fighter.heal(3), 2);
        assert_eq!(fighter.heal(3), 0);
        assert_eq!(fighter.health(), fighter.health_max());
    }

    #[test]
    fn huge_heal_stops_at_maximum() {
        let mut fighter = knight();
        fighter.take_damage(3);
        assert_eq!(fighter.heal(i32::MAX), 3);
        assert_eq!(fighter.health(), 16);
        assert_eq!(fighter.heal(-5), 0);
    }

    #[test]
    fn overkill_goes_negative_but_displays_zero() {
        let mut fighter = knight();
        fighter.take_damage(20);
        assert_eq!(fighter.health(), -4);
        assert_eq!(fighter.display_health(), 0);
        assert!(fighter.is_defeated());
    }
}
