use clap::{Args, Parser, Subcommand};

use omnivore_export::fetch::ENDPOINT;

#[derive(Parser, Debug)]
#[command(name = "omnivore-export")]
#[command(about = "Export saved pages from Omnivore to JSON and CSV")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch all saved pages from the API into nodes-id-url.json
    Fetch(FetchArgs),

    /// Convert nodes-id-url.json into nodes-id-url.csv
    Convert,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// API key for Omnivore
    #[arg(long, env = "OMNIVORE_API_KEY")]
    pub apikey: String,

    /// Search query selecting the pages to export
    #[arg(long, default_value = "in:all")]
    pub query: String,

    /// GraphQL endpoint to query
    #[arg(long, default_value = ENDPOINT, hide = true)]
    pub endpoint: String,
}
