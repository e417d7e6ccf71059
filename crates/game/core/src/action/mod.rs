//! Closed set of player commands.
//!
//! [`CommandKind`] is the token-level surface the harness parses; [`Command`]
//! carries the item name for `use` and `inspect`. Both are dispatched by a
//! single match in [`GameEngine::dispatch`](crate::engine::GameEngine::dispatch).

use strum::IntoEnumIterator;

/// Recognized command tokens, in help order.
///
/// Tokens are lowercase and matched case-sensitively.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum CommandKind {
    Quit,
    Help,
    Status,
    Rest,
    Explore,
    Flee,
    Attack,
    Inventory,
    Use,
    Inspect,
}

impl CommandKind {
    /// Parses a command token; `None` for anything unrecognized.
    pub fn parse(token: &str) -> Option<Self> {
        token.parse().ok()
    }

    /// All commands in help order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// True for commands that need an item name before they can run.
    pub const fn needs_item(self) -> bool {
        matches!(self, Self::Use | Self::Inspect)
    }

    /// Builds the full command. `item` is only read for `use` and
    /// `inspect`; a missing name becomes the empty string, which no
    /// inventory contains.
    pub fn into_command(self, item: Option<String>) -> Command {
        match self {
            Self::Quit => Command::Quit,
            Self::Help => Command::Help,
            Self::Status => Command::Status,
            Self::Rest => Command::Rest,
            Self::Explore => Command::Explore,
            Self::Flee => Command::Flee,
            Self::Attack => Command::Attack,
            Self::Inventory => Command::Inventory,
            Self::Use => Command::Use(item.unwrap_or_default()),
            Self::Inspect => Command::Inspect(item.unwrap_or_default()),
        }
    }
}

/// A fully specified player command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Quit,
    Help,
    Status,
    Rest,
    Explore,
    Flee,
    Attack,
    Inventory,
    Use(String),
    Inspect(String),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Quit => CommandKind::Quit,
            Self::Help => CommandKind::Help,
            Self::Status => CommandKind::Status,
            Self::Rest => CommandKind::Rest,
            Self::Explore => CommandKind::Explore,
            Self::Flee => CommandKind::Flee,
            Self::Attack => CommandKind::Attack,
            Self::Inventory => CommandKind::Inventory,
            Self::Use(_) => CommandKind::Use,
            Self::Inspect(_) => CommandKind::Inspect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_lowercase_and_case_sensitive() {
        assert_eq!(CommandKind::parse("explore"), Some(CommandKind::Explore));
        assert_eq!(CommandKind::parse("inventory"), Some(CommandKind::Inventory));
        assert_eq!(CommandKind::parse("Explore"), None);
        assert_eq!(CommandKind::parse("dance"), None);
        assert_eq!(CommandKind::parse(""), None);
    }

    #[test]
    fn help_order_is_fixed() {
        let tokens: Vec<String> = CommandKind::all().map(|kind| kind.to_string()).collect();
        assert_eq!(
            tokens,
            [
                "quit",
                "help",
                "status",
                "rest",
                "explore",
                "flee",
                "attack",
                "inventory",
                "use",
                "inspect"
            ]
        );
    }

    #[test]
    fn item_commands_carry_their_argument() {
        assert!(CommandKind::Use.needs_item());
        assert!(!CommandKind::Attack.needs_item());
        let command = CommandKind::Use.into_command(Some("Apple".into()));
        assert_eq!(command, Command::Use("Apple".into()));
        assert_eq!(command.kind(), CommandKind::Use);
        assert_eq!(
            CommandKind::Inspect.into_command(None),
            Command::Inspect(String::new())
        );
        assert_eq!(CommandKind::Flee.into_command(Some("x".into())), Command::Flee);
    }
}
