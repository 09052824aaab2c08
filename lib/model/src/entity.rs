use crate::error::LookupError;
use std::fmt;

/// The kind of entity a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A concept, addressed by a Q-identifier.
    Item,
    /// A predicate, addressed by a P-identifier.
    Property,
}

impl EntityKind {
    /// The value used in the lookup API's `type` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Item => "item",
            EntityKind::Property => "property",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate entity returned by the lookup API, in relevance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMatch {
    pub label: String,
    pub id: String,
    pub description: String,
}

/// The outcome of an entity lookup.
///
/// `matches` is empty when the lookup degraded; the condition is reported
/// through `error` instead of being thrown past the client boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub matches: Vec<EntityMatch>,
    pub error: Option<LookupError>,
}

impl SearchResponse {
    pub fn failed(error: LookupError) -> Self {
        Self {
            matches: Vec::new(),
            error: Some(error),
        }
    }
}
