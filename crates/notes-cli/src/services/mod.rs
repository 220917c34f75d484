// crates/notes-cli/src/services/mod.rs - Service layer modules
pub mod editor;

pub use editor::EditorService;
