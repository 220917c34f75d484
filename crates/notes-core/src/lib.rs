// crates/notes-core/src/lib.rs - Core library for the notes launcher
//
// Pure logic shared by the CLI: run configuration and date header
// maintenance. Nothing here spawns processes.

pub mod config;
pub mod header;

pub use config::{ConfigError, Editor, NotesConfig};
pub use header::{HeaderError, HeaderOutcome, ensure_header};
