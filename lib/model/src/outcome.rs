use crate::ResultTable;
use crate::error::FailureKind;
use serde_json::Value;

/// Raw response material captured during an execution.
///
/// Kept next to the normalized outcome so a caller can always show what the
/// endpoint actually returned, on success as well as on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Renders the payload for display in a raw-response panel.
    pub fn to_display_string(&self) -> String {
        match self {
            Payload::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Payload::Text(text) => text.clone(),
        }
    }
}

/// The result of executing a query against an endpoint.
///
/// Exactly one variant is produced per execution. The executor never
/// returns an `Err` and never panics; every failure mode is folded into
/// [`QueryOutcome::Failure`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// A JSON response with `results.bindings`, including the zero-row case.
    Table { table: ResultTable, raw: Value },
    /// A JSON response with a top-level `boolean` field (ASK form).
    Boolean { value: bool, raw: Value },
    /// A `text/csv` response that parsed cleanly.
    CsvTable { table: ResultTable, raw: String },
    /// A body that was received but not tabularized (XML, broken CSV, or an
    /// unrecognized content type). `note` says why.
    RawText { content: String, note: String },
    /// A transport, status, or decoding failure. `detail` holds whatever
    /// raw response material was captured at the point of failure.
    Failure {
        kind: FailureKind,
        message: String,
        detail: Option<Payload>,
    },
}

impl QueryOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, QueryOutcome::Failure { .. })
    }

    /// The raw payload preserved for this outcome, if any was captured.
    pub fn raw_payload(&self) -> Option<Payload> {
        match self {
            QueryOutcome::Table { raw, .. } | QueryOutcome::Boolean { raw, .. } => {
                Some(Payload::Json(raw.clone()))
            }
            QueryOutcome::CsvTable { raw, .. } => Some(Payload::Text(raw.clone())),
            QueryOutcome::RawText { content, .. } => Some(Payload::Text(content.clone())),
            QueryOutcome::Failure { detail, .. } => detail.clone(),
        }
    }
}
