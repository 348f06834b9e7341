use clap::Parser;
use monthwise::cli::Cli;
use monthwise::config::{init_tracing, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load();
    init_tracing(config.as_ref().ok().map(|c| c.log_filter.as_str()));

    cli.run(config?)
}
