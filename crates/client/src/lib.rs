//! Terminal front end for the forest adventure.
//!
//! The binary wires configuration, logging, and content together; the
//! session itself lives in [`harness`] and only needs a reader and a writer.

pub mod config;
pub mod harness;
pub mod logging;
pub mod start_screen;

pub use config::ClientConfig;
pub use harness::{play, read_line, run};
pub use start_screen::create_player;
