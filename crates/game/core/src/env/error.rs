//! Content validation errors.
//!
//! Raised while assembling [`ContentTables`](super::ContentTables); a game
//! never starts with inconsistent tables.

use crate::env::LootTableId;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("duplicate {kind} '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("spawn table references unknown species '{0}'")]
    UnknownSpecies(String),

    #[error("{owner} references unknown item '{item}'")]
    UnknownItem { owner: String, item: String },

    #[error("species '{species}' references unknown loot table {id}")]
    UnknownLootTable { species: String, id: LootTableId },

    #[error("{0} has no entry with a positive weight")]
    EmptyDistribution(String),

    #[error("{0} has a total weight above {max}", max = u32::MAX)]
    WeightOverflow(String),

    #[error("{owner} has {field} {value}, expected 0..=100")]
    ChanceOutOfRange {
        owner: String,
        field: &'static str,
        value: u32,
    },

    #[error("{0} must start with positive health")]
    NonPositiveHealth(String),

    #[error("no professions defined")]
    NoProfessions,
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ContentError::*;
        match self {
            DuplicateName { .. } => "CONTENT_DUPLICATE_NAME",
            UnknownSpecies(_) => "CONTENT_UNKNOWN_SPECIES",
            UnknownItem { .. } => "CONTENT_UNKNOWN_ITEM",
            UnknownLootTable { .. } => "CONTENT_UNKNOWN_LOOT_TABLE",
            EmptyDistribution(_) => "CONTENT_EMPTY_DISTRIBUTION",
            WeightOverflow(_) => "CONTENT_WEIGHT_OVERFLOW",
            ChanceOutOfRange { .. } => "CONTENT_CHANCE_OUT_OF_RANGE",
            NonPositiveHealth(_) => "CONTENT_NON_POSITIVE_HEALTH",
            NoProfessions => "CONTENT_NO_PROFESSIONS",
        }
    }
}
