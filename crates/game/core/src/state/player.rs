use crate::env::ProfessionPreset;
use crate::state::{Combatant, Enemy, Inventory};

/// The player's current mode, gating which actions are meaningful.
///
/// ```text
/// Resting ──explore──▶ InCombat ──flee / defeat enemy──▶ Tired ──rest──▶ Resting
///    │                                                      ▲
///    └───────────────flee / attack (nothing there)──────────┘
/// any ──quit──▶ Quit
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    #[strum(serialize = "rested")]
    Resting,
    #[strum(serialize = "tired")]
    Tired,
    #[strum(serialize = "in-combat")]
    InCombat,
    #[strum(serialize = "quit")]
    Quit,
}

/// The single player character.
///
/// Owns its inventory and, while in combat, the current [`Enemy`]. The
/// enemy is dropped on every exit from combat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub(crate) combatant: Combatant,
    profession: String,
    pub(crate) status: Status,
    pub(crate) encounter: Option<Enemy>,
    pub(crate) inventory: Inventory,
}

impl Player {
    /// Creates a rested player with the preset's stats and starting kit.
    pub fn new(name: impl Into<String>, preset: &ProfessionPreset) -> Self {
        let mut inventory = Inventory::new();
        for kit in &preset.starting_inventory {
            inventory.add(&kit.item, kit.count);
        }

        Self {
            combatant: Combatant::new(name, preset.stats),
            profession: preset.name.clone(),
            status: Status::Resting,
            encounter: None,
            inventory,
        }
    }

    pub fn name(&self) -> &str {
        self.combatant.name()
    }

    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn health(&self) -> i32 {
        self.combatant.health()
    }

    pub fn health_max(&self) -> i32 {
        self.combatant.health_max()
    }

    pub fn profession(&self) -> &str {
        &self.profession
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The enemy currently being fought, if any.
    pub fn encounter(&self) -> Option<&Enemy> {
        self.encounter.as_ref()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ContentTables;

    #[test]
    fn farmer_starts_with_apples() {
        let forest = ContentTables::forest();
        let player = Player::new("Jo", forest.profession("Farmer").unwrap());
        assert_eq!(player.inventory().count("Apple"), 3);
        assert_eq!(player.health(), 14);
        assert_eq!(player.status(), Status::Resting);
        assert!(player.encounter().is_none());
    }

    #[test]
    fn knight_starts_empty_handed() {
        let forest = ContentTables::forest();
        let player = Player::new("Ada", forest.profession("Knight").unwrap());
        assert!(player.inventory().is_empty());
        assert_eq!(player.combatant().stats().armor, 2);
        assert_eq!(player.profession(), "Knight");
    }

    #[test]
    fn status_words() {
        assert_eq!(Status::Resting.to_string(), "rested");
        assert_eq!(Status::InCombat.to_string(), "in-combat");
        assert_eq!(Status::Tired.as_ref(), "tired");
        assert_eq!(Status::Quit.to_string(), "quit");
    }
}
