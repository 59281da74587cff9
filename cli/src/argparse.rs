use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "solr",
    about = "Query and update a Solr core through the JSON Request API",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Core or collection URL, e.g. http://localhost:8983/solr/books (defaults to SOLR_URL)
    #[arg(long, global = true, conflicts_with = "config")]
    pub base_url: Option<String>,

    /// TOML file with client configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search documents
    Select(SelectArgs),
    /// Add or delete documents
    Update(UpdateArgs),
}

#[derive(Args)]
pub struct SelectArgs {
    /// Main query, e.g. "title:solr"
    #[arg(long, default_value = "*:*")]
    pub query: String,

    /// Filter query, may be repeated
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Collapse results on this field
    #[arg(long)]
    pub collapse: Option<String>,

    /// Comma-separated list of fields to return
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Sort spec, e.g. "id desc"
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long)]
    pub offset: Option<u64>,

    #[arg(long)]
    pub limit: Option<u64>,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// JSON document to add, may be repeated
    #[arg(long = "add")]
    pub documents: Vec<String>,

    /// Commit the added documents within this many milliseconds
    #[arg(long, requires = "documents")]
    pub commit_within: Option<u64>,

    /// Id of a document to delete, may be repeated
    #[arg(long = "delete-id")]
    pub delete_ids: Vec<String>,

    /// Delete all documents matching this query
    #[arg(long)]
    pub delete_query: Option<String>,

    /// Optimize the index after the other commands
    #[arg(long)]
    pub optimize: bool,

    /// Commit at the end of the batch
    #[arg(long)]
    pub commit: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
