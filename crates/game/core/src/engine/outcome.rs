//! Narratable results of engine operations.
//!
//! Every operation returns an [`Outcome`]; its `Display` impl produces the
//! exact line(s) shown to the player. Combat outcomes carry the underlying
//! [`AttackReport`]s so callers can inspect the rolls as well.

use std::fmt;

use crate::action::CommandKind;
use crate::combat::{AttackReport, Defense};
use crate::state::Status;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Ending {
    Quit,
    Defeated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Quit {
        name: String,
    },
    Help {
        commands: Vec<CommandKind>,
    },
    Status {
        name: String,
        status: Status,
        health: i32,
        health_max: i32,
    },
    Rested {
        name: String,
        healed: i32,
    },
    AlreadyRested {
        name: String,
    },
    CannotRest {
        name: String,
    },
    Encounter {
        name: String,
        species: String,
    },
    Distracted {
        name: String,
    },
    Fled {
        name: String,
        enemy: String,
    },
    RanInCircles {
        name: String,
    },
    /// Both sides landed (or missed) one attack and the enemy still stands.
    Exchange {
        dealt: AttackReport,
        taken: AttackReport,
    },
    /// The player's attack finished the enemy; it never strikes back.
    Vanquished {
        dealt: AttackReport,
        drop: Option<String>,
    },
    AttackedAir {
        name: String,
    },
    Inventory {
        name: String,
        entries: Vec<(String, u32)>,
    },
    ItemUsed {
        name: String,
        item: String,
        healed: i32,
    },
    NotOwned {
        name: String,
    },
    Description {
        item: String,
        text: String,
    },
    NotUnderstood {
        name: String,
    },
}

impl Outcome {
    /// True when the operation changed nothing but reported why.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRested { .. }
                | Self::CannotRest { .. }
                | Self::Distracted { .. }
                | Self::NotOwned { .. }
                | Self::NotUnderstood { .. }
        )
    }
}

fn write_events(f: &mut fmt::Formatter<'_>, report: &AttackReport) -> fmt::Result {
    if report.critical {
        writeln!(f, "{} got a critical strike!", report.attacker)?;
    }
    match report.defense {
        Defense::Blocked => writeln!(f, "{} blocks the incoming attack", report.defender),
        Defense::Dodged => writeln!(f, "{} dodges the incoming attack", report.defender),
        Defense::Struck => Ok(()),
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit { name } => write!(f, "{name} decides to head back home."),
            Self::Help { commands } => {
                for (index, command) in commands.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{command}")?;
                }
                Ok(())
            }
            Self::Status {
                name,
                status,
                health,
                health_max,
            } => write!(
                f,
                "{name} is {status} with health: {}/{health_max}.",
                (*health).max(0)
            ),
            Self::Rested { name, .. } => write!(f, "{name} feels refreshed."),
            Self::AlreadyRested { name } => write!(f, "{name} is already well rested."),
            Self::CannotRest { name } => write!(f, "{name} can't rest right now"),
            Self::Encounter { name, species } => write!(f, "{name} has run into a {species}!"),
            Self::Distracted { name } => write!(f, "{name} is currently distracted."),
            Self::Fled { name, .. } => write!(f, "{name} flees like a coward."),
            Self::RanInCircles { name } => {
                write!(f, "{name} runs in a circle a couple of times.")
            }
            Self::Exchange { dealt, taken } => {
                write_events(f, dealt)?;
                write_events(f, taken)?;
                write!(
                    f,
                    "{} dealt {} damage to the {}\nThe {} dealt {} damage to {}.",
                    dealt.attacker,
                    dealt.damage,
                    dealt.defender,
                    taken.attacker,
                    taken.damage,
                    taken.defender
                )
            }
            Self::Vanquished { dealt, drop } => {
                write_events(f, dealt)?;
                write!(
                    f,
                    "{} dealt {} damage to the {}, vanquishing it!",
                    dealt.attacker, dealt.damage, dealt.defender
                )?;
                if let Some(item) = drop {
                    write!(f, " It dropped a(n) {item}!")?;
                }
                Ok(())
            }
            Self::AttackedAir { name } => {
                write!(f, "{name} ineffectively attacks the air for a while.")
            }
            Self::Inventory { name, entries } => {
                if entries.is_empty() {
                    return write!(f, "{name} is carrying nothing.");
                }
                for (index, (item, count)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{item}(s) : {count}")?;
                }
                Ok(())
            }
            Self::ItemUsed { name, item, .. } => write!(f, "{name} used a(n) {item}"),
            Self::NotOwned { name } => write!(f, "{name} doesn't own that item."),
            Self::Description { text, .. } => f.write_str(text),
            Self::NotUnderstood { name } => {
                write!(f, "{name} doesn't understand the suggestion.")
            }
        }
    }
}
