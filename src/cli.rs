use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "glimpse",
    about = "Fuzzy search and suggestion ranking over a JSON catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print classified suggestions (corrections, completions, related)
    Suggest {
        /// Path to a JSON array of catalog items
        #[arg(short, long)]
        catalog: String,

        /// The search query
        query: String,

        /// Emit raw JSON instead of grouped text
        #[arg(long)]
        json: bool,
    },

    /// Print the exact / approximate result partition
    Results {
        /// Path to a JSON array of catalog items
        #[arg(short, long)]
        catalog: String,

        /// The search query
        query: String,

        /// Emit raw JSON instead of grouped text
        #[arg(long)]
        json: bool,
    },
}
