//! domxp - Main Entry Point

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use domxp_cli::{Cli, Outcome, config, logging, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("{err:#}");
    }

    match execute(&cli) {
        Ok(Outcome::Found) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => ExitCode::from(1),
        Err(err) => {
            tracing::error!("Command failed: {err:#}");
            eprintln!("domxp: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = config::load(cli.config.as_deref())?;
    let html = read_input(cli.input.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &html, config, &mut out)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("failed to read HTML from stdin")?;
            Ok(html)
        }
    }
}
