use clap::Parser;
use fileurl_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("fileurl error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = cli.load_config()?;

    let sink = logging::init("fileurl", cfg.log_to_file);
    tracing::debug!("loaded config: {:?}, logging to {:?}", cfg, sink);

    cli.command.run(&cfg)
}
