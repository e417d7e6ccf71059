//! Combat rules and the encounter controller for a single-player forest
//! adventure.
//!
//! `game-core` performs no I/O. Content arrives as immutable
//! [`env::ContentTables`], randomness through the [`env::RngOracle`] seam,
//! and every player action flows through [`engine::GameEngine`], which
//! returns a narratable [`engine::Outcome`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Command, CommandKind};
pub use combat::{AttackReport, DamageReport, Defense, apply_damage, resolve_attack};
pub use config::{GameConfig, LootRoll};
pub use engine::{EngineError, Ending, GameEngine, Outcome, spawn_player};
pub use env::{
    ContentError, ContentTables, EncounterTables, Env, ItemCatalog, ItemDefinition, LootTable,
    LootTableId, ProfessionPreset, RngOracle, ScriptedRng, SeededRng, SpeciesTemplate,
    StartingItem, WeightedEntry, weighted_choice, weighted_index,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{CombatStats, Combatant, Enemy, Inventory, Player, Status};
