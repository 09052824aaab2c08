use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use sparql_workbench_client::DEFAULT_ACCEPT;
use sparql_workbench_model::EntityKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "sparql-workbench")]
/// Compose and execute SPARQL queries, search knowledge-base entities
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Execute a query against an endpoint and render the result
    Query {
        /// Endpoint preset name ("wikidata", "europeana") or a full URL
        #[arg(short, long, default_value = "wikidata")]
        endpoint: String,
        /// Read the query from a file
        ///
        /// If neither this nor --template is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "template")]
        file: Option<PathBuf>,
        /// Use the body of a named template as the query
        #[arg(short, long)]
        template: Option<String>,
        /// Accept header to send with the request
        #[arg(long, default_value = DEFAULT_ACCEPT)]
        accept: String,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 60)]
        timeout: u64,
        /// Also print the raw response payload after the rendered result
        #[arg(long)]
        raw: bool,
    },
    /// Search entities by label and print copy-ready identifiers
    Search {
        /// Free-text search term
        term: String,
        /// Kind of entity to search for
        #[arg(short, long, value_enum, default_value_t = KindArg::Item)]
        kind: KindArg,
        /// Language for the search and the returned labels
        #[arg(short, long, default_value = "en")]
        language: String,
        /// Maximum number of matches
        #[arg(long, default_value_t = 7)]
        limit: usize,
    },
    /// List the bundled query templates
    Templates {
        /// Print the body of the given template instead of the list
        #[arg(long)]
        show: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum KindArg {
    /// A concept (Q-identifier)
    Item,
    /// A predicate (P-identifier)
    Property,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Item => EntityKind::Item,
            KindArg::Property => EntityKind::Property,
        }
    }
}
