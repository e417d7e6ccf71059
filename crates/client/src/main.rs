//! Dungeon game client binary.
//!
//! Composition root: loads `.env`, merges environment and command-line
//! configuration, installs file logging, loads content, and hands stdin and
//! stdout to the command loop.
//!
//! # Examples
//!
//! ```bash
//! # Built-in forest, random seed
//! cargo run -p dungeon-client
//!
//! # Reproducible run against a content directory
//! cargo run -p dungeon-client -- --seed 42 --data-dir crates/game/content/data/forest
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_client::{ClientConfig, logging, play};
use game_content::ContentFactory;
use game_core::SeededRng;

/// Text adventure in a dark forest
#[derive(Parser)]
#[command(name = "dungeon")]
#[command(about = "Explore a dark forest, fight what you find, and try to make it home", long_about = None)]
#[command(version)]
struct Args {
    /// Seed for all random draws (overrides DUNGEON_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory with species.ron, professions.ron, items.ron, tables.ron
    /// and an optional config.toml (overrides DUNGEON_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Character name; skips the name prompt
    #[arg(long)]
    name: Option<String>,

    /// Character profession
    #[arg(long)]
    profession: Option<String>,
}

impl From<Args> for ClientConfig {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed,
            data_dir: args.data_dir,
            name: args.name,
            profession: args.profession,
            ..Self::default()
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env().merge(Args::parse().into());
    let _guard = logging::setup_logging(&config)?;

    let pack = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir)
            .load()
            .with_context(|| format!("Failed to load content from {}", dir.display()))?,
        None => ContentFactory::builtin()?,
    };
    tracing::info!(
        data_dir = ?config.data_dir,
        professions = pack.tables.profession_names().count(),
        species = pack.tables.all_species().len(),
        "content loaded"
    );

    let mut rng = match config.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "random source ready");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    let ending = play(
        &pack,
        &mut rng,
        config.name,
        config.profession,
        &mut input,
        &mut output,
    )?;

    tracing::info!(ending = ?ending, "client shutdown complete");
    Ok(())
}
