// crates/notes-cli/src/services/editor.rs - Editor Integration Service
//
// Hands the notes file to an external editor and blocks until the user
// quits it. The editor owns the terminal for the duration.

use notes_core::Editor;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Handles text editor operations
pub struct EditorService;

impl EditorService {
    /// Open a file in the given editor and wait for it to exit
    ///
    /// PROCESS HANDLING:
    /// - Editor is looked up on PATH and gets the file as its only argument
    /// - stdin, stdout and stderr are inherited so the editor is interactive
    /// - The child is reaped before returning
    ///
    /// The editor's outcome does not affect the run: a failed launch or a
    /// non-zero exit is only recorded at debug level.
    pub fn open_file(editor: Editor, path: &Path) {
        debug!(editor = %editor, path = %path.display(), "launching editor");

        let result = Command::new(editor.program())
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match result {
            Ok(status) => debug!(editor = %editor, ?status, "editor exited"),
            Err(e) => debug!(editor = %editor, error = %e, "failed to launch editor"),
        }
    }
}

