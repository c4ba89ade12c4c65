//! `amogbook` binary: loads config, then runs the shell over a script or stdin.

use amogbook_cli::{load_settings, Shell};
use amogbook_core::{DisplayMode, Notebook, PaletteKind};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("amogbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Case notebook and suspicion board for social-deduction games")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .value_parser(value_parser!(PathBuf))
                .help("Read commands from a file instead of stdin"),
        )
        .arg(
            Arg::new("palette")
                .long("palette")
                .value_parser(["classic", "extended"])
                .help("Override the configured palette"),
        )
        .arg(
            Arg::new("full")
                .long("full")
                .action(ArgAction::SetTrue)
                .help("Start in the full view"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print listings as JSON"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .default_value("warn")
                .help("Diagnostic level when RUST_LOG is unset"),
        )
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map_or("warn", String::as_str);
    init_tracing(level);

    let mut config = load_settings(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    match matches.get_one::<String>("palette").map(String::as_str) {
        Some("classic") => config.palette = PaletteKind::Classic,
        Some("extended") => config.palette = PaletteKind::Extended,
        _ => {}
    }
    if matches.get_flag("full") {
        config.start_mode = DisplayMode::Full;
    }

    let notebook = Notebook::new(config).context("invalid notebook configuration")?;
    let stdout = io::stdout();
    let mut shell = Shell::new(notebook, stdout.lock()).with_json(matches.get_flag("json"));

    match matches.get_one::<PathBuf>("script") {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            shell.run(BufReader::new(file))?;
        }
        None => shell.run(io::stdin().lock())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let m = cli()
            .try_get_matches_from(["amogbook", "--palette", "classic", "--full", "--json"])
            .unwrap();
        assert_eq!(m.get_one::<String>("palette").map(String::as_str), Some("classic"));
        assert!(m.get_flag("full"));
        assert!(m.get_flag("json"));
        assert_eq!(m.get_one::<String>("log-level").map(String::as_str), Some("warn"));
    }

    #[test]
    fn rejects_unknown_palette() {
        assert!(cli()
            .try_get_matches_from(["amogbook", "--palette", "neon"])
            .is_err());
    }
}
