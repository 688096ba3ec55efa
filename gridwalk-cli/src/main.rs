mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })?;

    let cli = Cli::parse();

    // Show gridwalk info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("gridwalk", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Zone {
            path,
            start,
            boundary,
            minimal,
        } => commands::zone::run(path, start, boundary, *minimal, &cli.global),
        Command::Buses { path } => commands::buses::run(path, &cli.global),
        Command::Bays { path, bus } => commands::bays::run(path, bus, &cli.global),
        Command::Primary { path, min_voltage } => {
            commands::primary::run(path, *min_voltage, &cli.global)
        }
    }
}
