//! Common error infrastructure for game-core.
//!
//! Gameplay itself never fails: wrong-state actions and missing items are
//! ordinary [`Outcome`](crate::engine::Outcome) values. Errors only appear at
//! the edges, when content tables are assembled or a player is created from a
//! profession that does not exist.
//!
//! Domain-specific errors (`ContentError`, `EngineError`) live beside the code
//! that produces them and implement [`GameError`] for uniform classification.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that the caller can correct and retry.
    ///
    /// Examples: unknown profession typed at the start screen
    Validation,

    /// Content is inconsistent and the game cannot start.
    ///
    /// Examples: spawn table names a species that has no stat row
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller may retry with different input.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: std::error::Error {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and for asserting on error kinds in tests.
    fn error_code(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
