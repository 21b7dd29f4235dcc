mod commands;
mod terminal;

use commands::{CommandLine, analyze};
use flowtally_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet)?;

    let cfg: Config = commands.into_config();

    print::banner(cfg.no_banner, cfg.quiet);
    analyze::analyze(&cfg)
}
