// src/bin/cli.rs
use clap::Parser;
use kz_parse::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    let level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    kz_parse::log::init(level);

    cli::run(args)?;
    Ok(())
}
