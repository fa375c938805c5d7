use clap::Parser;

use omnivore_export::convert;
use omnivore_export::fetch::{self, FetchOptions};

mod args;
use args::{Cli, Command};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Fetch(fetch_args) => fetch::run(&FetchOptions {
            api_key: fetch_args.apikey,
            query: fetch_args.query,
            endpoint: fetch_args.endpoint,
        }),
        Command::Convert => convert::run(),
    }
}
