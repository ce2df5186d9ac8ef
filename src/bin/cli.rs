// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::eyre;

use salary_join::cli::{self, Cli};
use salary_join::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    logging::init(args.verbose);

    let summary = cli::run(args).map_err(|e| eyre!("{e}"))?;
    for path in &summary.files_written {
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
