use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI (usage error → exit 2, rien sur stdout)
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr)
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    // 3. Rendre et écrire
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

/// Resolve the config, render the graph and write it to `out`.
///
/// Nothing is written if the input is rejected.
///
/// # Errors
/// Returns an error on invalid configuration, rejected magnitudes, or a
/// failed write.
fn run(cli: &cli::Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.resolve_config()?;
    let magnitudes = config.negative_policy.apply_all(cli.integers())?;

    let renderer = bg_graph::renderer_for(&config);
    log::info!("{} graph, {} bars", renderer.name(), magnitudes.len());
    let graph = renderer.render(&magnitudes);

    out.write_all(graph.as_bytes()).context("cannot write graph")?;
    if config.trailing_newline {
        out.write_all(b"\n").context("cannot write graph")?;
    }
    out.flush().context("cannot flush output")?;
    Ok(())
}
