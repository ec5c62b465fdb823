use std::io;
use std::io::BufWriter;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use wolfram::driver;
use wolfram::driver::Config;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout only ever carries the automaton
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    driver::run(&Config::default(), &mut out).context("Failed to print automaton")?;

    Ok(())
}
