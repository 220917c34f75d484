use clap::Parser;
use std::ffi::OsString;

/// Long flag names that may also be written with a single dash
///
/// `vs` is the two-letter short form of `--vscode`; clap only supports
/// single-character shorts, so it is rewritten to the `--vs` alias.
const SINGLE_DASH_LONGS: &[&str] = &["private", "clear", "vscode", "vs"];

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "notes")]
#[command(about = "Open your notes file with today's date on top")]
#[command(version)]
pub struct Cli {
    /// Open non-work notes (~/notes-personal.txt)
    #[arg(short = 'p', long)]
    pub private: bool,

    /// Insert 50 newlines to not show notes on startup
    #[arg(short = 'c', long)]
    pub clear: bool,

    /// Use VSCode instead of nvim [short: -vs]
    #[arg(long, alias = "vs")]
    pub vscode: bool,

    /// Print debug logging to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash long forms
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-private`, `-clear`, `-vscode` and `-vs` to their double-dash
/// forms so clap sees them as long flags instead of bundled shorts.
///
/// The first item is the program name and is passed through untouched, as is
/// everything after a bare `--`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let rewritten = arg
            .to_str()
            .and_then(|s| s.strip_prefix('-'))
            .filter(|name| !name.starts_with('-'))
            .filter(|name| SINGLE_DASH_LONGS.contains(name))
            .map(|name| OsString::from(format!("--{}", name)));

        out.push(rewritten.unwrap_or(arg));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["notes"];
        full.extend_from_slice(args);
        Cli::try_parse_from(normalize_args(full)).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(!cli.private);
        assert!(!cli.clear);
        assert!(!cli.vscode);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_long_and_short_forms_set_the_same_flag() {
        assert!(parse(&["--private"]).private);
        assert!(parse(&["-p"]).private);
        assert!(parse(&["-private"]).private);

        assert!(parse(&["--clear"]).clear);
        assert!(parse(&["-c"]).clear);
        assert!(parse(&["-clear"]).clear);

        assert!(parse(&["--vscode"]).vscode);
        assert!(parse(&["-vs"]).vscode);
        assert!(parse(&["--vs"]).vscode);
        assert!(parse(&["-vscode"]).vscode);
    }

    #[test]
    fn test_combined_flags() {
        let cli = parse(&["-p", "-c", "-vs"]);
        assert!(cli.private && cli.clear && cli.vscode);

        let cli = parse(&["-pc"]);
        assert!(cli.private && cli.clear && !cli.vscode);
    }

    #[test]
    fn test_normalize_leaves_other_args_alone() {
        let args = normalize_args(["notes", "-p", "--clear", "-x", "--", "-vs"]);
        assert_eq!(args, vec!["notes", "-p", "--clear", "-x", "--", "-vs"]);

        let args = normalize_args(["-vs", "-vs"]);
        assert_eq!(args, vec!["-vs", "--vs"]);
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(normalize_args(["notes", "extra.txt"])).is_err());
        assert!(Cli::try_parse_from(normalize_args(["notes", "-v"])).is_err());
    }
}
