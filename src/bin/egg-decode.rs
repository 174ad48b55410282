use anyhow::Context;
use clap::Parser;
use egg_decode::{RevealOptions, locate::DEFAULT_MARKER};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Path to a file containing a string that is Base64 encoded and ROT13 encoded.
#[derive(Parser)]
#[command(name = "egg-decode", version)]
struct Cli {
    /// File with a line that is encoded twice
    #[arg(short = 'f', long = "file", value_name = "FILE", value_parser = existing_file)]
    file: PathBuf,

    /// Substring that marks the Base64 line
    #[arg(long, default_value = DEFAULT_MARKER)]
    marker: String,
}

fn existing_file(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("The file {arg} does not exist!"))
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let options = RevealOptions { marker: cli.marker };
    let egg = egg_decode::reveal_file(&cli.file, &options)
        .with_context(|| format!("could not reveal {}", cli.file.display()))?;
    println!("{egg}");

    Ok(())
}
