// crates/dos2unix-cli/src/main.rs

use clap::Parser;

use dos2unix_cli::cmd;
use dos2unix_cli::config::{Cli, Config};
use dos2unix_cli::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let cfg = Config::from_cli(cli)?;
    cmd::run(&cfg)
}
