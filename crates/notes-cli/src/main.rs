// crates/notes-cli/src/main.rs - CLI Application Entry Point
//
// `notes` opens ~/notes.txt (or ~/notes-personal.txt with --private) in an
// editor, stamping today's date on top first.
//
// EXAMPLE USAGE:
// ```bash
// notes              # today's work notes in nvim
// notes -p           # private notes
// notes -c -vs       # hide older notes and open in VS Code
// ```
//
// Flow: parse flags -> build Context (flags + HOME) -> commands::open.
// Any error ends up in the single handler below, which logs it and exits 1.

use anyhow::Result;
use std::io::IsTerminal;
use std::process;
use tracing::{Level, error};

mod cli;
mod commands;
mod context;
mod services;

use cli::Cli;
use context::Context;

fn main() {
    let cli = Cli::parse_normalized();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = Context::new(cli)?;
    commands::open::handle(&ctx)
}

/// Log to stderr so nothing interleaves with the editor's stdout
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
