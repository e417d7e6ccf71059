//! Encounter and progression controller.
//!
//! The [`GameEngine`] owns the [`Player`] and is the only place its state
//! machine advances. Every operation is total: wrong-state actions and
//! missing items come back as ordinary [`Outcome`] values, never as errors.
//! Randomness, content, and tunables are reached through the borrowed [`Env`].

mod errors;
mod outcome;

pub use errors::EngineError;
pub use outcome::{Ending, Outcome};

use crate::action::{Command, CommandKind};
use crate::combat::resolve_attack;
use crate::env::{ContentTables, Env};
use crate::state::{Enemy, Player, Status};

/// Creates a rested player from the named profession preset.
pub fn spawn_player(
    tables: &ContentTables,
    name: impl Into<String>,
    profession: &str,
) -> Result<Player, EngineError> {
    let preset = tables
        .profession(profession)
        .ok_or_else(|| EngineError::UnknownProfession {
            name: profession.to_owned(),
            known: tables.profession_names().collect::<Vec<_>>().join(", "),
        })?;
    Ok(Player::new(name, preset))
}

/// Drives one player through explore, combat, and rest.
pub struct GameEngine<'a> {
    player: Player,
    env: Env<'a>,
}

impl<'a> GameEngine<'a> {
    pub fn new(player: Player, env: Env<'a>) -> Self {
        Self { player, env }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// True once the player has quit or fallen.
    pub fn is_over(&self) -> bool {
        self.ending().is_some()
    }

    /// How the session ended, or `None` while it is still running.
    ///
    /// Quitting forces health to zero, so the status is checked first.
    pub fn ending(&self) -> Option<Ending> {
        if self.player.status == Status::Quit {
            Some(Ending::Quit)
        } else if self.player.combatant.is_defeated() {
            Some(Ending::Defeated)
        } else {
            None
        }
    }

    /// Routes a command to its operation.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        tracing::debug!(target: "game_core::engine", command = %command.kind(), "dispatch");
        match command {
            Command::Quit => self.quit(),
            Command::Help => self.help(),
            Command::Status => self.status(),
            Command::Rest => self.rest(),
            Command::Explore => self.explore(),
            Command::Flee => self.flee(),
            Command::Attack => self.attack(),
            Command::Inventory => self.inventory(),
            Command::Use(item) => self.use_item(&item),
            Command::Inspect(item) => self.inspect(&item),
        }
    }

    pub fn quit(&mut self) -> Outcome {
        self.player.combatant.knock_out();
        self.transition(Status::Quit);
        self.player.encounter = None;
        Outcome::Quit {
            name: self.name(),
        }
    }

    pub fn help(&self) -> Outcome {
        Outcome::Help {
            commands: CommandKind::all().collect(),
        }
    }

    pub fn status(&self) -> Outcome {
        Outcome::Status {
            name: self.name(),
            status: self.player.status,
            health: self.player.health(),
            health_max: self.player.health_max(),
        }
    }

    /// Recovers [`GameConfig::rest_heal`](crate::GameConfig::rest_heal)
    /// health when tired.
    pub fn rest(&mut self) -> Outcome {
        let name = self.name();
        match self.player.status {
            Status::Tired => {
                let healed = self.player.combatant.heal(self.env.config().rest_heal);
                self.transition(Status::Resting);
                Outcome::Rested { name, healed }
            }
            Status::Resting => Outcome::AlreadyRested { name },
            Status::InCombat | Status::Quit => Outcome::CannotRest { name },
        }
    }

    /// Spawns an enemy from the weighted spawn table.
    pub fn explore(&mut self) -> Outcome {
        let name = self.name();
        if self.player.status == Status::InCombat {
            return Outcome::Distracted { name };
        }

        let tables = self.env.tables();
        let template = tables.roll_species(self.env.rng());
        tracing::info!(
            target: "game_core::engine",
            species = %template.name,
            health = template.stats.health,
            "encounter spawned"
        );
        self.player.encounter = Some(Enemy::from_template(template));
        self.transition(Status::InCombat);

        Outcome::Encounter {
            name,
            species: template.name.clone(),
        }
    }

    /// Leaves combat, or runs in place when there is nothing to flee from.
    /// Either way the player ends up tired.
    pub fn flee(&mut self) -> Outcome {
        let name = self.name();
        let fled = if self.player.status == Status::InCombat {
            self.player.encounter.take()
        } else {
            None
        };
        self.transition(Status::Tired);

        match fled {
            Some(enemy) => Outcome::Fled {
                name,
                enemy: enemy.name().to_owned(),
            },
            None => Outcome::RanInCircles { name },
        }
    }

    /// One exchange of blows with the current enemy.
    ///
    /// The enemy strikes back only if it survives. A defeated enemy is
    /// discarded, the player becomes tired, and a loot roll may add one item
    /// to the inventory.
    pub fn attack(&mut self) -> Outcome {
        if self.player.status != Status::InCombat || self.player.encounter.is_none() {
            self.transition(Status::Tired);
            return Outcome::AttackedAir { name: self.name() };
        }

        let config = self.env.config();
        let tables = self.env.tables();
        let Player {
            combatant,
            encounter,
            inventory,
            ..
        } = &mut self.player;
        let Some(enemy) = encounter.as_mut() else {
            return Outcome::AttackedAir {
                name: combatant.name().to_owned(),
            };
        };

        let dealt = resolve_attack(combatant, &mut enemy.combatant, config, self.env.rng());
        if !enemy.combatant.is_defeated() {
            let taken = resolve_attack(&enemy.combatant, combatant, config, self.env.rng());
            return Outcome::Exchange { dealt, taken };
        }

        let Some(enemy) = encounter.take() else {
            return Outcome::Vanquished { dealt, drop: None };
        };
        let roll = self.env.rng().roll_percent();
        let drop = if config.loot_triggers(roll, enemy.drop_chance()) {
            tables
                .roll_loot(enemy.loot_table(), self.env.rng())
                .map(|item| {
                    inventory.add(&item.name, 1);
                    item.name.clone()
                })
        } else {
            None
        };
        tracing::info!(
            target: "game_core::engine",
            species = enemy.name(),
            roll,
            drop = drop.as_deref().unwrap_or("nothing"),
            "enemy vanquished"
        );
        self.transition(Status::Tired);

        Outcome::Vanquished { dealt, drop }
    }

    pub fn inventory(&self) -> Outcome {
        Outcome::Inventory {
            name: self.name(),
            entries: self
                .player
                .inventory
                .iter()
                .map(|(item, count)| (item.to_owned(), count))
                .collect(),
        }
    }

    /// Consumes one unit of `item` and applies its healing.
    pub fn use_item(&mut self, item: &str) -> Outcome {
        let name = self.name();
        if !self.player.inventory.take(item) {
            return Outcome::NotOwned { name };
        }

        let heal = self.env.tables().item(item).map_or(0, |definition| definition.heal);
        let healed = self.player.combatant.heal(heal);
        tracing::info!(
            target: "game_core::engine",
            item,
            healed,
            health = self.player.health(),
            "item used"
        );

        Outcome::ItemUsed {
            name,
            item: item.to_owned(),
            healed,
        }
    }

    pub fn inspect(&self, item: &str) -> Outcome {
        let definition = self
            .player
            .inventory
            .contains(item)
            .then(|| self.env.tables().item(item))
            .flatten();

        match definition {
            Some(definition) => Outcome::Description {
                item: definition.name.clone(),
                text: definition.description.clone(),
            },
            None => Outcome::NotOwned { name: self.name() },
        }
    }

    /// The refusal the harness prints for an unrecognized token.
    pub fn not_understood(&self) -> Outcome {
        Outcome::NotUnderstood { name: self.name() }
    }

    fn name(&self) -> String {
        self.player.name().to_owned()
    }

    fn transition(&mut self, next: Status) {
        let previous = self.player.status;
        self.player.status = next;
        if previous != next {
            tracing::debug!(
                target: "game_core::engine",
                from = %previous,
                to = %next,
                "status changed"
            );
        }
    }
}
