//! Client configuration from the environment and the command line.
use std::env;
use std::path::PathBuf;

/// Settings for one play session.
///
/// Environment variables provide the base values; command-line flags
/// override them field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Seed for the random source; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Content directory; the built-in forest pack is used when absent.
    pub data_dir: Option<PathBuf>,
    /// Names the log subdirectory for this run.
    pub session_id: Option<String>,
    /// Root of the log tree; defaults to the platform cache directory.
    pub log_dir: Option<PathBuf>,
    /// Skips the name prompt.
    pub name: Option<String>,
    /// First profession answer; the prompt still repeats while it is invalid.
    pub profession: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_SEED` - RNG seed (default: random)
    /// - `DUNGEON_DATA_DIR` - Content directory (default: built-in forest)
    /// - `DUNGEON_SESSION_ID` - Log session name (default: `session_<unix time>`)
    /// - `DUNGEON_LOG_DIR` - Log root (default: platform cache dir)
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("DUNGEON_SEED"),
            data_dir: env::var("DUNGEON_DATA_DIR").ok().map(PathBuf::from),
            session_id: env::var("DUNGEON_SESSION_ID").ok(),
            log_dir: env::var("DUNGEON_LOG_DIR").ok().map(PathBuf::from),
            name: None,
            profession: None,
        }
    }

    /// Overlays every field that is set in `other`.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        self.seed = other.seed.or(self.seed);
        self.data_dir = other.data_dir.or(self.data_dir);
        self.session_id = other.session_id.or(self.session_id);
        self.log_dir = other.log_dir.or(self.log_dir);
        self.name = other.name.or(self.name);
        self.profession = other.profession.or(self.profession);
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
