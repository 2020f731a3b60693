use std::process;

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    match commands::run(cli).await {
        Ok(()) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(EXIT_ERROR);
        }
    }
}
