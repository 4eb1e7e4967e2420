mod cmd;
mod config;
mod error;

use clap::Parser;
use config::{Cli, Commands};
use error::CliError;

fn run(cli: &Cli) -> Result<String, CliError> {
    let defaults = config::load(cli.config.as_deref())?;
    match &cli.command {
        Commands::Text(args) => cmd::text::run(args, &defaults),
        Commands::Bytes(args) => cmd::bytes::encode(args, &defaults),
        Commands::Int(args) => cmd::bytes::decode(args, &defaults),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&Cli::parse()) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
