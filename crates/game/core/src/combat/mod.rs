//! Combat resolution system.
//!
//! Pure functions for one exchange of blows. They mutate only the defender
//! and return plain facts; all narration is composed by the engine.
//!
//! # Core Functions
//!
//! - `resolve_attack`: damage roll, critical check, then `apply_damage`
//! - `apply_damage`: shared block/dodge roll, armor reduction, health change

pub mod damage;
pub mod result;

pub use damage::{DamageReport, Defense, apply_damage};
pub use result::{AttackReport, resolve_attack};
