use anyhow::Result;
use notes_core::NotesConfig;
use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

/// Application context that gets passed to command handlers
///
/// Holds the configuration resolved from flags and HOME. Built once in
/// `main`; handlers only ever see it by reference.
pub struct Context {
    config: NotesConfig,
}

impl Context {
    /// Resolve configuration from parsed flags and the HOME environment variable
    pub fn new(cli: &Cli) -> Result<Self> {
        let home = env::var_os("HOME").map(PathBuf::from);
        Self::with_home(cli, home)
    }

    /// Same as `new` with an explicit HOME value
    pub fn with_home(cli: &Cli, home: Option<PathBuf>) -> Result<Self> {
        let config = NotesConfig::from_home(home, cli.private, cli.clear, cli.vscode)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NotesConfig {
        &self.config
    }
}
