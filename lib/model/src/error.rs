/// Classifies why a query execution did not produce a usable result.
///
/// Note that an unrecognized content type is *not* part of this taxonomy:
/// it degrades to [`QueryOutcome::RawText`](crate::QueryOutcome::RawText)
/// instead of a failure, since the endpoint did answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FailureKind {
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error status")]
    HttpStatus,
    /// DNS failure, refused connection, malformed URL and similar.
    #[error("transport error")]
    Transport,
    /// The body could not be decoded as its declared content type.
    #[error("response decoding failed")]
    Decode,
    /// Well-formed JSON with neither `results.bindings` nor `boolean`.
    #[error("unexpected response structure")]
    UnexpectedShape,
}

/// A degraded condition reported by the entity lookup client.
///
/// Carried alongside the (then empty) match list instead of being thrown,
/// so the caller always has a single non-null list type to render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LookupError {
    #[error("entity lookup request timed out")]
    Timeout,
    #[error("entity lookup request failed: {0}")]
    Transport(String),
    #[error("entity lookup response was not valid JSON: {0}")]
    Decode(String),
}

/// A row was pushed whose width does not match the table's column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("row has {actual} cells but the table has {expected} columns")]
pub struct TableShapeError {
    pub expected: usize,
    pub actual: usize,
}
