use serde_json::Value;
use sparql_workbench_model::error::FailureKind;
use sparql_workbench_model::{Payload, QueryOutcome, ResultTable};

/// Maps a successfully received response body to a [`QueryOutcome`].
///
/// Dispatch happens purely on the declared `Content-Type` header
/// (case-insensitive substring match); the body is never sniffed.
pub(crate) fn classify_body(content_type: &str, body: String) -> QueryOutcome {
    let declared = content_type.to_ascii_lowercase();
    if declared.contains("sparql-results+json") || declared.contains("json") {
        classify_json(body)
    } else if declared.contains("xml") {
        QueryOutcome::RawText {
            content: body,
            note: "XML result received; not tabularized".to_owned(),
        }
    } else if declared.contains("text/csv") {
        classify_csv(body)
    } else {
        QueryOutcome::RawText {
            content: body,
            note: format!("unrecognized content type: {content_type}"),
        }
    }
}

fn classify_json(body: String) -> QueryOutcome {
    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            return QueryOutcome::Failure {
                kind: FailureKind::Decode,
                message: format!("could not decode JSON body: {e}"),
                detail: Some(Payload::Text(body)),
            };
        }
    };

    if let Some(bindings) = value.pointer("/results/bindings").and_then(Value::as_array) {
        return match tabularize_bindings(&value, bindings) {
            Ok(table) => QueryOutcome::Table { table, raw: value },
            Err(message) => QueryOutcome::Failure {
                kind: FailureKind::UnexpectedShape,
                message,
                detail: Some(Payload::Json(value)),
            },
        };
    }

    if let Some(boolean) = value.get("boolean").and_then(Value::as_bool) {
        return QueryOutcome::Boolean {
            value: boolean,
            raw: value,
        };
    }

    // The full parsed object is kept as detail so the caller can still show
    // what the endpoint returned.
    QueryOutcome::Failure {
        kind: FailureKind::UnexpectedShape,
        message: "unexpected JSON structure".to_owned(),
        detail: Some(Payload::Json(value)),
    }
}

/// Builds a table from a SPARQL JSON result.
///
/// Columns come from the declared `head.vars` list, never from individual
/// rows, so a variable left unbound by an `OPTIONAL` pattern yields a
/// `None` cell instead of a missing key.
fn tabularize_bindings(value: &Value, bindings: &[Value]) -> Result<ResultTable, String> {
    let columns: Vec<String> = value
        .pointer("/head/vars")
        .and_then(Value::as_array)
        .map(|vars| {
            vars.iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default();

    let rows = bindings
        .iter()
        .map(|binding| {
            columns
                .iter()
                .map(|column| {
                    binding
                        .get(column)
                        .and_then(|term| term.get("value"))
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .collect()
        })
        .collect();

    ResultTable::from_rows(columns, rows).map_err(|e| e.to_string())
}

fn classify_csv(body: String) -> QueryOutcome {
    match parse_csv(&body) {
        Ok(table) => QueryOutcome::CsvTable { table, raw: body },
        Err(e) => QueryOutcome::RawText {
            content: body,
            note: format!("CSV received but failed to parse: {e}"),
        },
    }
}

fn parse_csv(text: &str) -> Result<ResultTable, String> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let columns = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        rows.push(record.iter().map(|cell| Some(cell.to_owned())).collect());
    }
    ResultTable::from_rows(columns, rows).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELECT_BODY: &str = r#"{
        "head": {"vars": ["a", "b"]},
        "results": {"bindings": [
            {"a": {"type": "literal", "value": "1"}, "b": {"type": "uri", "value": "http://example.com/x"}},
            {"a": {"type": "literal", "value": "2"}}
        ]}
    }"#;

    #[test]
    fn bindings_become_a_table_with_declared_columns() {
        let outcome = classify_body("application/sparql-results+json", SELECT_BODY.to_owned());
        let QueryOutcome::Table { table, raw } = outcome else {
            panic!("expected Table, got {outcome:?}");
        };
        assert_eq!(table.columns(), ["a", "b"]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.cell(0, 1), Some("http://example.com/x"));
        assert!(raw.pointer("/results/bindings").is_some());
    }

    #[test]
    fn unbound_optional_variable_is_null_not_missing() {
        let outcome = classify_body("application/json", SELECT_BODY.to_owned());
        let QueryOutcome::Table { table, .. } = outcome else {
            panic!("expected Table");
        };
        // Second binding binds only `a`; `b` must still be present as None.
        assert_eq!(table.rows()[1].len(), 2);
        assert_eq!(table.rows()[1][0].as_deref(), Some("2"));
        assert_eq!(table.rows()[1][1], None);
    }

    #[test]
    fn empty_bindings_keep_declared_columns() {
        let body = r#"{"head": {"vars": ["x", "y", "z"]}, "results": {"bindings": []}}"#;
        let outcome = classify_body("application/sparql-results+json", body.to_owned());
        let QueryOutcome::Table { table, .. } = outcome else {
            panic!("expected Table, not a failure");
        };
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.columns(), ["x", "y", "z"]);
    }

    #[test]
    fn ask_result_is_routed_to_boolean() {
        let body = r#"{"head": {}, "boolean": true}"#;
        let outcome = classify_body("application/sparql-results+json", body.to_owned());
        assert_eq!(
            outcome,
            QueryOutcome::Boolean {
                value: true,
                raw: serde_json::from_str(body).unwrap(),
            }
        );
    }

    #[test]
    fn malformed_json_fails_with_body_retained() {
        let body = "{not json";
        let outcome = classify_body("application/json", body.to_owned());
        let QueryOutcome::Failure {
            kind,
            message,
            detail,
        } = outcome
        else {
            panic!("expected Failure");
        };
        assert_eq!(kind, FailureKind::Decode);
        assert!(!message.is_empty());
        assert_eq!(detail, Some(Payload::Text(body.to_owned())));
    }

    #[test]
    fn json_without_bindings_or_boolean_keeps_full_object_as_detail() {
        let body = r#"{"something": "else"}"#;
        let outcome = classify_body("application/json", body.to_owned());
        let QueryOutcome::Failure { kind, detail, .. } = outcome else {
            panic!("expected Failure");
        };
        assert_eq!(kind, FailureKind::UnexpectedShape);
        assert_eq!(
            detail,
            Some(Payload::Json(serde_json::from_str(body).unwrap()))
        );
    }

    #[test]
    fn xml_is_passed_through_as_raw_text() {
        let body = "<?xml version=\"1.0\"?><sparql></sparql>";
        let outcome =
            classify_body("application/sparql-results+xml; charset=utf-8", body.to_owned());
        let QueryOutcome::RawText { content, note } = outcome else {
            panic!("expected RawText");
        };
        assert_eq!(content, body);
        assert!(note.contains("XML"));
    }

    #[test]
    fn parseable_csv_becomes_a_table() {
        let body = "a,b\n1,2\n3,4\n";
        let outcome = classify_body("text/csv; charset=utf-8", body.to_owned());
        let QueryOutcome::CsvTable { table, raw } = outcome else {
            panic!("expected CsvTable");
        };
        assert_eq!(table.columns(), ["a", "b"]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.cell(1, 0), Some("3"));
        assert_eq!(raw, body);
    }

    #[test]
    fn broken_csv_degrades_to_raw_text_with_note() {
        // Three cells in a two-column record is a hard error for the reader.
        let body = "a,b\n1,2,3\n";
        let outcome = classify_body("text/csv", body.to_owned());
        let QueryOutcome::RawText { content, note } = outcome else {
            panic!("expected RawText");
        };
        assert_eq!(content, body);
        assert!(note.starts_with("CSV received but failed to parse"));
    }

    #[test]
    fn unknown_content_type_is_named_in_the_note() {
        let body = "hello";
        let outcome = classify_body("text/plain", body.to_owned());
        assert_eq!(
            outcome,
            QueryOutcome::RawText {
                content: body.to_owned(),
                note: "unrecognized content type: text/plain".to_owned(),
            }
        );
    }

    #[test]
    fn content_type_match_is_case_insensitive() {
        let body = r#"{"head": {"vars": []}, "results": {"bindings": []}}"#;
        let outcome = classify_body("Application/SPARQL-Results+JSON", body.to_owned());
        assert!(matches!(outcome, QueryOutcome::Table { .. }));
    }
}
