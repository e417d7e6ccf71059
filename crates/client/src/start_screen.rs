//! Character creation before the first command.

use std::io::{self, BufRead, Write};

use game_core::{ContentTables, GameError, Player, spawn_player};

use crate::harness::read_line;

/// Asks for a name and a profession until a valid profession is given.
///
/// `name` and `profession` pre-answer the prompts (the name prompt is then
/// skipped; an invalid preset profession still re-prompts). Returns `None`
/// if input ends first.
pub fn create_player<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    tables: &ContentTables,
    name: Option<String>,
    profession: Option<String>,
) -> io::Result<Option<Player>> {
    let name = match name {
        Some(name) => name,
        None => {
            write!(
                output,
                "Welcome to the adventure! What is your character's name?\n> "
            )?;
            output.flush()?;
            match read_line(input)? {
                Some(name) => name,
                None => return Ok(None),
            }
        }
    };

    let offered = tables.profession_names().collect::<Vec<_>>().join(", ");
    write!(output, "What is {name}'s profession? [{offered}]\n> ")?;
    output.flush()?;

    let mut answer = profession;
    let player = loop {
        let choice = match answer.take() {
            Some(choice) => choice,
            None => match read_line(input)? {
                Some(choice) => choice,
                None => return Ok(None),
            },
        };

        match spawn_player(tables, name.as_str(), &choice) {
            Ok(player) => break player,
            Err(err) if err.severity().is_recoverable() => {
                tracing::debug!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "{err}"
                );
                write!(
                    output,
                    "That is not a valid profession in this forest, try again.\n> "
                )?;
                output.flush()?;
            }
            Err(err) => return Err(io::Error::other(err)),
        }
    };

    writeln!(output, "(type help to get a list of actions)\n")?;
    writeln!(
        output,
        "{} the {} walks deep into a dark forest looking for an adventure.",
        player.name(),
        player.profession()
    )?;
    tracing::info!(
        name = player.name(),
        profession = player.profession(),
        "character created"
    );

    Ok(Some(player))
}
