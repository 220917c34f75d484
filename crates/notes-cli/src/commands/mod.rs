// crates/notes-cli/src/commands/mod.rs - Command Handler Modules
//
// - open: stamp the header, then hand the file to the editor

pub mod open;
