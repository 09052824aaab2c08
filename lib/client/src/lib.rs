//! HTTP clients for the workbench core: query execution against an
//! arbitrary SPARQL endpoint and free-text entity lookup.
//!
//! Neither client lets an error escape as `Err` or a panic; every failure
//! mode folds into the value returned to the caller
//! ([`QueryOutcome`](sparql_workbench_model::QueryOutcome) and
//! [`SearchResponse`](sparql_workbench_model::SearchResponse)).

mod classify;
mod executor;
mod lookup;

pub use executor::{DEFAULT_ACCEPT, DEFAULT_QUERY_TIMEOUT, QueryExecutor};
pub use lookup::{
    DEFAULT_LANGUAGE, DEFAULT_LIMIT, DEFAULT_LOOKUP_TIMEOUT, EntityLookupClient,
    WIKIDATA_API_ENDPOINT,
};

/// Identifying header sent with every outgoing request.
pub(crate) const USER_AGENT: &str =
    concat!("sparql-workbench/", env!("CARGO_PKG_VERSION"));
