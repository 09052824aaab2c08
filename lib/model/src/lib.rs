mod entity;
pub mod error;
mod outcome;
mod table;

pub use entity::{EntityKind, EntityMatch, SearchResponse};
pub use outcome::{Payload, QueryOutcome};
pub use table::ResultTable;
