use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "phrase-search", about = "Store phrases as embeddings and search by meaning")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the web form
    Serve {
        /// Address to listen on
        #[arg(long, env = "PHRASE_SEARCH_BIND", default_value = "0.0.0.0:3000")]
        bind: String,
        /// Keep phrases in process memory instead of Redis
        #[arg(long)]
        in_memory: bool,
    },
    /// Embed and store a phrase
    Add {
        text: String,
    },
    /// Find the stored phrases nearest to a query
    Search {
        text: String,
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}
