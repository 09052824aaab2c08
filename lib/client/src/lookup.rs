use crate::USER_AGENT;
use serde_json::Value;
use sparql_workbench_model::error::LookupError;
use sparql_workbench_model::{EntityKind, EntityMatch, SearchResponse};
use std::time::Duration;

/// The label-search API used by the default client.
pub const WIKIDATA_API_ENDPOINT: &str = "https://www.wikidata.org/w/api.php";

/// Timeout applied to each lookup request.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_LIMIT: usize = 7;

const NO_LABEL: &str = "No label";
const NO_DESCRIPTION: &str = "No description";

/// Searches a label-search API by free text and returns candidate entities.
///
/// Degraded conditions (timeout, transport failure, undecodable JSON) are
/// reported through [`SearchResponse::error`] next to an empty match list;
/// nothing is thrown past this boundary. Results are not cached here — a
/// caller may memoize them keyed by the full parameter tuple.
pub struct EntityLookupClient {
    client: reqwest::Client,
    api_endpoint: String,
    timeout: Duration,
}

impl EntityLookupClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_endpoint(WIKIDATA_API_ENDPOINT)
    }

    /// Creates a client against a non-default API base URL. Used by tests
    /// and by deployments with a local API mirror.
    pub fn with_endpoint(api_endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_endpoint: api_endpoint.into(),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// [`search`](Self::search) with the default language and limit.
    pub async fn search_default(&self, term: &str, kind: EntityKind) -> SearchResponse {
        self.search(term, kind, DEFAULT_LANGUAGE, DEFAULT_LIMIT).await
    }

    /// Looks up entities matching `term`, in the API's relevance order.
    ///
    /// Items without an identifier are dropped; missing labels and
    /// descriptions fall back to fixed placeholders.
    pub async fn search(
        &self,
        term: &str,
        kind: EntityKind,
        language: &str,
        limit: usize,
    ) -> SearchResponse {
        tracing::debug!(term, %kind, language, limit, "searching entities");

        let limit_param = limit.to_string();
        let response = self
            .client
            .get(&self.api_endpoint)
            .query(&[
                ("action", "wbsearchentities"),
                ("format", "json"),
                ("language", language),
                ("uselang", language),
                ("search", term),
                ("limit", limit_param.as_str()),
                ("type", kind.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await;

        let response = match response.and_then(|r| r.error_for_status()) {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!(term, "entity lookup timed out");
                return SearchResponse::failed(LookupError::Timeout);
            }
            Err(e) => {
                tracing::warn!(term, error = %e, "entity lookup failed");
                return SearchResponse::failed(LookupError::Transport(e.to_string()));
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(term, error = %e, "entity lookup body read failed");
                return SearchResponse::failed(LookupError::Transport(e.to_string()));
            }
        };

        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(term, error = %e, "entity lookup returned invalid JSON");
                return SearchResponse::failed(LookupError::Decode(e.to_string()));
            }
        };

        let matches = value
            .get("search")
            .and_then(Value::as_array)
            .map(|items| project_matches(items, limit))
            .unwrap_or_default();

        SearchResponse {
            matches,
            error: None,
        }
    }
}

fn project_matches(items: &[Value], limit: usize) -> Vec<EntityMatch> {
    items
        .iter()
        .filter_map(|item| {
            let id = item.get("id").and_then(Value::as_str)?;
            Some(EntityMatch {
                label: string_or(item, "label", NO_LABEL),
                id: id.to_owned(),
                description: string_or(item, "description", NO_DESCRIPTION),
            })
        })
        .take(limit)
        .collect()
}

fn string_or(item: &Value, field: &str, fallback: &str) -> String {
    item.get(field)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn items_without_an_id_are_dropped() {
        let items = [
            json!({"id": "Q937", "label": "Albert Einstein", "description": "physicist"}),
            json!({"label": "no identifier here"}),
        ];
        let matches = project_matches(&items, 7);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "Q937");
    }

    #[test]
    fn missing_label_and_description_use_placeholders() {
        let items = [json!({"id": "P31"})];
        let matches = project_matches(&items, 7);
        assert_eq!(matches[0].label, "No label");
        assert_eq!(matches[0].description, "No description");
    }

    #[test]
    fn results_are_capped_at_the_limit() {
        let items: Vec<Value> = (0..10).map(|i| json!({"id": format!("Q{i}")})).collect();
        assert_eq!(project_matches(&items, 3).len(), 3);
    }
}
