// src/bin/cli.rs
use color_eyre::eyre::eyre;
use subsidy_search::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    subsidy_search::log::init();
    cli::run().map_err(|e| eyre!("{e}"))
}
