//! Error types for setting up a game.

use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced before the first command runs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("unknown profession '{name}', expected one of: {known}")]
    UnknownProfession { name: String, known: String },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownProfession { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownProfession { .. } => "ENGINE_UNKNOWN_PROFESSION",
        }
    }
}
