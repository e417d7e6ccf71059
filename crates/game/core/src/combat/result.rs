//! Attack resolution.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::Combatant;

use super::damage::{Defense, apply_damage};

/// Facts about one attack, enough for the caller to narrate it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attacker: String,
    pub defender: String,
    /// Damage rolled before the defender's block, dodge, and armor.
    pub rolled: u32,
    pub critical: bool,
    pub defense: Defense,
    /// Health actually removed from the defender.
    pub damage: u32,
}

impl AttackReport {
    pub fn blocked(&self) -> bool {
        self.defense == Defense::Blocked
    }

    pub fn dodged(&self) -> bool {
        self.defense == Defense::Dodged
    }
}

/// Resolve one attack from `attacker` against `defender`.
///
/// # Formula
///
/// ```text
/// damage = strength + draw in [0, damage_variance]
/// if percent draw < crit_chance: damage *= crit_multiplier
/// apply_damage(defender, damage)
/// ```
///
/// Draw order is fixed: variance, critical, then the defender's block/dodge
/// roll.
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &mut Combatant,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
) -> AttackReport {
    let stats = attacker.stats();
    let mut rolled = stats.strength.saturating_add(rng.range(0, config.damage_variance));

    let critical = rng.roll_percent() < stats.crit_chance;
    if critical {
        rolled = rolled.saturating_mul(config.crit_multiplier.max(1));
        tracing::debug!(target: "game_core::combat", attacker = attacker.name(), rolled, "critical strike");
    }

    let report = apply_damage(defender, rolled, rng);

    AttackReport {
        attacker: attacker.name().to_owned(),
        defender: defender.name().to_owned(),
        rolled,
        critical,
        defense: report.defense,
        damage: report.applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ScriptedRng, SeededRng};
    use crate::state::CombatStats;

    fn wolf() -> Combatant {
        Combatant::new("Wolf", CombatStats::new(2, 3, 0, 0, 0, 10))
    }

    fn knight() -> Combatant {
        Combatant::new("Ada", CombatStats::new(16, 4, 2, 0, 0, 0))
    }

    #[test]
    fn plain_hit_adds_variance_and_subtracts_armor() {
        let mut defender = knight();
        // variance 2, no crit (roll 50), no defense (roll 50)
        let mut rng = ScriptedRng::new([2, 50, 50]);
        let report = resolve_attack(&wolf(), &mut defender, &GameConfig::default(), &mut rng);
        assert_eq!(report.rolled, 5);
        assert!(!report.critical);
        assert_eq!(report.damage, 3);
        assert_eq!(defender.health(), 13);
    }

    #[test]
    fn critical_doubles_rolled_damage() {
        let mut defender = knight();
        let mut rng = ScriptedRng::new([1, 9, 50]);
        let report = resolve_attack(&wolf(), &mut defender, &GameConfig::default(), &mut rng);
        assert!(report.critical);
        assert_eq!(report.rolled, 8);
        assert_eq!(report.damage, 6);
        assert_eq!(report.attacker, "Wolf");
        assert_eq!(report.defender, "Ada");
    }

    #[test]
    fn crit_chance_zero_never_crits() {
        let mut defender = wolf();
        let mut rng = ScriptedRng::new([0, 0, 100]);
        let report = resolve_attack(&knight(), &mut defender, &GameConfig::default(), &mut rng);
        assert!(!report.critical);
        assert_eq!(report.damage, 4);
    }

    #[test]
    fn extreme_strength_saturates() {
        let giant = Combatant::new("Giant", CombatStats::new(1, u32::MAX, 0, 0, 0, 100));
        let mut defender = knight();
        let config = GameConfig {
            damage_variance: u32::MAX,
            ..GameConfig::default()
        };
        // variance at its cap, crit roll 0, struck
        let mut rng = ScriptedRng::new([u32::MAX, 0, 50]);
        let report = resolve_attack(&giant, &mut defender, &config, &mut rng);
        assert!(report.critical);
        assert_eq!(report.rolled, u32::MAX);
        assert!(defender.is_defeated());
    }

    #[test]
    fn applied_damage_is_bounded_by_rolled() {
        let config = GameConfig::default();
        let mut rng = SeededRng::new(99);
        let rogue = Combatant::new("Rogue", CombatStats::new(10, 2, 0, 0, 20, 10));
        for _ in 0..500 {
            let mut defender = Combatant::new("Troll", CombatStats::new(400, 3, 1, 10, 0, 0));
            let before = defender.health();
            let report = resolve_attack(&rogue, &mut defender, &config, &mut rng);
            assert!(report.damage <= report.rolled);
            assert_eq!(before - defender.health(), report.damage as i32);
            if report.blocked() || report.dodged() {
                assert_eq!(report.damage, 0);
            }
            assert!(defender.health() <= defender.health_max());
        }
    }
}
