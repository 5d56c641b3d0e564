pub use clap::{Parser, Subcommand};

/// Indexing job console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base url of the indexing backend
    #[arg(long, env = "INDEXING_API_URL", default_value_t = String::from("http://localhost:8080"))]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the indexing status once
    Status,

    /// Start or stop indexing, depending on the button label
    Toggle {
        /// Identifier of the indexing target
        #[arg(long, default_value = "")]
        id: String,

        /// Current label of the toggle button
        #[arg(long, default_value = "Start indexing")]
        label: String,
    },

    /// Keep checking the indexing status
    Watch {
        /// Seconds between checks while indexing is not running
        #[arg(long, default_value = "30")]
        interval: u64,

        /// Seconds between checks while indexing is running
        #[arg(long, default_value = "1")]
        busy_interval: u64,
    },
}
