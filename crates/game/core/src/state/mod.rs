//! Mutable game state: combatants, the player, and the current enemy.
//!
//! Player and enemy share one [`Combatant`] by composition; they differ only
//! in the extra fields they carry, never in how they trade blows.
mod combatant;
mod enemy;
mod inventory;
mod player;

pub use combatant::{CombatStats, Combatant};
pub use enemy::Enemy;
pub use inventory::Inventory;
pub use player::{Player, Status};
