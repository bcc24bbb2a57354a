use std::io;

use clap::Parser;
use color_eyre::Result;

use textswap::cli::{self, Cli};
use textswap::config::load_config;
use textswap::input::InputReader;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Cli::parse();
    let config = load_config(args.config.as_deref())?;
    let text = InputReader::read_text(args.file.as_deref())?;

    cli::run(
        &args,
        &text,
        &config,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(())
}
