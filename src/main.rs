// Entrypoint for the CLI application.
// - Keeps `main` small: parse flags, build a `Config`, hand it to a command.
// - Returns `anyhow::Result` so any error ends the process with a message.

use art_cli::cli::{Cli, Command};
use art_cli::commands;
use art_cli::config::Config;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Upload(args) => {
            let mut config = Config::from_args(&args.connection)?.with_dry_run(args.dry_run);
            config.prompt_missing_password()?;
            commands::upload(&config, &args.local_path, &args.repo_path)?;
        }
        Command::Download(args) => {
            let mut config = Config::from_args(&args.connection)?.with_flat(args.flat);
            config.prompt_missing_password()?;
            commands::download(&config, &args.repo_path, Path::new("."))?;
        }
    }
    Ok(())
}

/// Warn by default; `-v` and `-vv` raise the crate's level on top of
/// whatever `RUST_LOG` asks for.
fn init_tracing(verbose: u8) {
    let mut env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let level = match verbose {
        0 => None,
        1 => Some("art_cli=info"),
        _ => Some("art_cli=debug"),
    };
    if let Some(directive) = level {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
