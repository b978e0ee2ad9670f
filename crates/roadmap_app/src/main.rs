mod cli;
mod commands;
mod config;
mod generator;

use clap::Parser;
use roadmap_logging::Level;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let level = if cli.verbose {
        Level::Debug
    } else {
        Level::Info
    };
    roadmap_logging::initialize(cli.log.into(), level);

    // Store operations are single-threaded; the runtime only drives timers
    // and the generator.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(commands::run(cli))
}
