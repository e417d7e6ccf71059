//! Line-oriented command loop.
//!
//! Generic over `BufRead`/`Write` so whole sessions can be replayed from
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use game_core::{CommandKind, Ending, Env, GameEngine, RngOracle};
use game_content::ContentPack;

use crate::start_screen::create_player;

/// Reads one line without its trailing newline. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Runs commands until the player quits, falls, or input ends.
///
/// End of input counts as quitting.
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Ending> {
    while !engine.is_over() {
        write!(output, "> ")?;
        output.flush()?;

        let Some(token) = read_line(input)? else {
            tracing::info!("input closed");
            writeln!(output)?;
            writeln!(output, "{}", engine.quit())?;
            break;
        };

        let outcome = match CommandKind::parse(&token) {
            Some(kind) => {
                let item = if kind.needs_item() {
                    write!(output, "Enter item to {kind} > ")?;
                    output.flush()?;
                    read_line(input)?
                } else {
                    None
                };
                engine.dispatch(kind.into_command(item))
            }
            None => {
                tracing::debug!(token = token.as_str(), "unrecognized command");
                engine.not_understood()
            }
        };
        writeln!(output, "{outcome}")?;
    }

    let ending = engine.ending().unwrap_or(Ending::Quit);
    if ending == Ending::Defeated {
        writeln!(
            output,
            "{} was unfortunately not able to make it out of the forest.",
            engine.player().name()
        )?;
    }
    tracing::info!(%ending, "session over");
    Ok(ending)
}

/// A whole session: character creation, then the command loop.
///
/// Returns `None` when input ends before a character exists.
pub fn play<R: BufRead, W: Write>(
    pack: &ContentPack,
    rng: &mut dyn RngOracle,
    name: Option<String>,
    profession: Option<String>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Ending>> {
    let Some(player) = create_player(input, output, &pack.tables, name, profession)? else {
        return Ok(None);
    };

    let env = Env::new(&pack.tables, &pack.config, rng);
    let mut engine = GameEngine::new(player, env);
    run(&mut engine, input, output).map(Some)
}
