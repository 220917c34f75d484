// crates/notes-core/src/config.rs - Run Configuration
//
// Everything a single `notes` run needs to know, resolved once at startup
// from the command-line flags and the HOME directory. There is no config
// file; the struct is built by the CLI and passed down by reference.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the default (work) notes under HOME
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

/// File name of the private notes under HOME
pub const PRIVATE_NOTES_FILE: &str = "notes-personal.txt";

/// Errors that can occur while resolving configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("HOME is not set; cannot locate notes files")]
    MissingHome,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Editor the notes file is handed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Editor {
    /// Terminal editor, the default
    #[default]
    Terminal,
    /// Visual Studio Code
    VsCode,
}

impl Editor {
    /// Pick the editor from the `--vscode` flag
    pub fn from_vscode_flag(vscode: bool) -> Self {
        if vscode { Self::VsCode } else { Self::Terminal }
    }

    /// Program name looked up on PATH
    pub fn program(&self) -> &'static str {
        match self {
            Self::Terminal => "nvim",
            Self::VsCode => "code",
        }
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Resolved configuration for one run
///
/// `private` chooses between the two notes files under `home`; the two are
/// never both touched in the same run.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesConfig {
    pub home: PathBuf,
    pub private: bool,
    pub clear: bool,
    pub editor: Editor,
}

impl NotesConfig {
    /// Build a configuration from the HOME value and the three flags.
    ///
    /// `home` is whatever the environment held; `None` or an empty string is
    /// rejected since both notes paths hang off it.
    pub fn from_home(
        home: Option<PathBuf>,
        private: bool,
        clear: bool,
        vscode: bool,
    ) -> ConfigResult<Self> {
        let home = home
            .filter(|h| !h.as_os_str().is_empty())
            .ok_or(ConfigError::MissingHome)?;

        Ok(Self {
            home,
            private,
            clear,
            editor: Editor::from_vscode_flag(vscode),
        })
    }

    /// `<HOME>/notes.txt`
    pub fn default_notes_path(&self) -> PathBuf {
        self.home.join(DEFAULT_NOTES_FILE)
    }

    /// `<HOME>/notes-personal.txt`
    pub fn private_notes_path(&self) -> PathBuf {
        self.home.join(PRIVATE_NOTES_FILE)
    }

    /// The file this run operates on
    pub fn notes_path(&self) -> PathBuf {
        if self.private {
            self.private_notes_path()
        } else {
            self.default_notes_path()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(private: bool, clear: bool, vscode: bool) -> NotesConfig {
        NotesConfig::from_home(Some(PathBuf::from("/home/me")), private, clear, vscode).unwrap()
    }

    #[test]
    fn test_default_file_routing() {
        let cfg = config(false, false, false);
        assert_eq!(cfg.notes_path(), PathBuf::from("/home/me/notes.txt"));
    }

    #[test]
    fn test_private_file_routing() {
        let cfg = config(true, false, false);
        assert_eq!(cfg.notes_path(), PathBuf::from("/home/me/notes-personal.txt"));
        assert_ne!(cfg.notes_path(), cfg.default_notes_path());
    }

    #[test]
    fn test_editor_selection_is_independent_of_other_flags() {
        for private in [false, true] {
            for clear in [false, true] {
                assert_eq!(config(private, clear, false).editor.program(), "nvim");
                assert_eq!(config(private, clear, true).editor.program(), "code");
            }
        }
        assert_eq!(Editor::default(), Editor::Terminal);
    }

    #[test]
    fn test_missing_home() {
        assert_eq!(
            NotesConfig::from_home(None, false, false, false),
            Err(ConfigError::MissingHome)
        );
        assert_eq!(
            NotesConfig::from_home(Some(PathBuf::new()), false, false, false),
            Err(ConfigError::MissingHome)
        );
    }
}
