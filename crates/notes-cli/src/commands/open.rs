// crates/notes-cli/src/commands/open.rs - Open Today's Notes
//
// The whole launcher flow: make sure the chosen notes file starts with
// today's header, then open it in the editor. Header failures abort the run
// before the editor is ever spawned.

use anyhow::{Context as AnyhowContext, Result};
use notes_core::header;
use tracing::debug;

use crate::context::Context;
use crate::services::EditorService;

pub fn handle(ctx: &Context) -> Result<()> {
    let config = ctx.config();
    let path = config.notes_path();
    let today = header::today();

    debug!(path = %path.display(), private = config.private, clear = config.clear, "preparing notes");
    header::ensure_header(&path, &today, config.clear)
        .with_context(|| format!("Cannot stamp {} header", today))?;

    EditorService::open_file(config.editor, &path);

    Ok(())
}
