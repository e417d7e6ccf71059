//! Defensive rolls and damage application.

use crate::env::RngOracle;
use crate::state::Combatant;

/// How the defender met an incoming hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Defense {
    /// Negated by a block; no health change.
    Blocked,
    /// Negated by a dodge; no health change.
    Dodged,
    /// Landed; armor still applies.
    Struck,
}

/// Result of [`apply_damage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    pub defense: Defense,
    /// Health actually removed from the defender.
    pub applied: u32,
}

/// Apply `damage` to `defender` after block, dodge, and armor.
///
/// # Formula
///
/// ```text
/// roll = percent draw in [0, 100]
/// if roll < block_chance: blocked
/// elif roll < dodge_chance: dodged
/// else: health -= max(damage - armor, 0)
/// ```
///
/// Block and dodge share a single roll compared against absolute thresholds,
/// so only the part of `dodge_chance` above `block_chance` ever dodges.
pub fn apply_damage(
    defender: &mut Combatant,
    damage: u32,
    rng: &mut (impl RngOracle + ?Sized),
) -> DamageReport {
    let stats = *defender.stats();
    let roll = rng.roll_percent();

    if roll < stats.block_chance {
        tracing::debug!(target: "game_core::combat", defender = defender.name(), roll, "blocked");
        return DamageReport {
            defense: Defense::Blocked,
            applied: 0,
        };
    }
    if roll < stats.dodge_chance {
        tracing::debug!(target: "game_core::combat", defender = defender.name(), roll, "dodged");
        return DamageReport {
            defense: Defense::Dodged,
            applied: 0,
        };
    }

    let applied = damage.saturating_sub(stats.armor);
    if applied > 0 {
        defender.take_damage(applied);
    }
    tracing::debug!(
        target: "game_core::combat",
        defender = defender.name(),
        damage,
        applied,
        health = defender.health(),
        "struck"
    );

    DamageReport {
        defense: Defense::Struck,
        applied,
    }
}
