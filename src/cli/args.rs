//! # CLI Argument Definitions
//!
//! Commands:
//! - bibliodb serve --config <path> [--seed <path>]
//! - bibliodb search [filters] [--page <n>]
//! - bibliodb add --title <t> --author <a> --year <y> [--description <d>]
//! - bibliodb edit <id> --title <t> --author <a> --year <y> [--description <d>]
//! - bibliodb delete <id>
//! - bibliodb show <id>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default server base URL for client commands
const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// bibliodb - a minimal, self-hostable bibliographic catalog
#[derive(Parser, Debug)]
#[command(name = "bibliodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the catalog server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bibliodb.json")]
        config: PathBuf,

        /// JSON file of books to load at startup
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Search the catalog
    Search(SearchArgs),

    /// Add a book
    Add(BookArgs),

    /// Edit an existing book
    Edit(EditArgs),

    /// Delete a book
    Delete {
        /// Server base URL
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,

        /// Record id
        id: u64,
    },

    /// Show a single book
    Show {
        /// Server base URL
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,

        /// Record id
        id: u64,
    },
}

/// Filter arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Server base URL
    #[arg(long, default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Title substring
    #[arg(long)]
    pub title: Option<String>,

    /// Author substring
    #[arg(long)]
    pub author: Option<String>,

    /// Description substring
    #[arg(long)]
    pub description: Option<String>,

    /// Year operator: Range, =, >, >=, < or <= (word forms: range, eq, gt,
    /// gte, lt, lte)
    #[arg(long)]
    pub year_op: Option<String>,

    /// Lower year bound (default 0)
    #[arg(long)]
    pub year_from: Option<u32>,

    /// Upper year bound (default: current year)
    #[arg(long)]
    pub year_to: Option<u32>,
}

/// Record fields for the add command
#[derive(Args, Debug)]
pub struct BookArgs {
    /// Server base URL
    #[arg(long, default_value = DEFAULT_SERVER)]
    pub server: String,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    /// Publish year
    #[arg(long)]
    pub year: u32,

    #[arg(long)]
    pub description: Option<String>,
}

/// Record id plus fields for the edit command
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Record id
    pub id: u64,

    #[command(flatten)]
    pub book: BookArgs,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
