use crate::USER_AGENT;
use crate::classify::classify_body;
use reqwest::header;
use sparql_workbench_model::error::FailureKind;
use sparql_workbench_model::{Payload, QueryOutcome};
use std::time::Duration;

/// Timeout applied to each query request.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(60);

/// `Accept` header sent when the caller does not override it.
pub const DEFAULT_ACCEPT: &str = "application/sparql-results+json";

/// How many characters of an error body are kept as failure detail.
const ERROR_DETAIL_LIMIT: usize = 500;

/// Executes queries against arbitrary SPARQL endpoints and normalizes the
/// responses into [`QueryOutcome`] values.
///
/// The executor is stateless across calls and never caches: query results
/// are endpoint- and time-dependent. It also never returns an `Err` from
/// [`execute`](Self::execute); transport failures, error statuses and
/// undecodable bodies all fold into [`QueryOutcome::Failure`].
pub struct QueryExecutor {
    client: reqwest::Client,
    timeout: Duration,
}

impl QueryExecutor {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(DEFAULT_QUERY_TIMEOUT)
    }

    /// Creates an executor with a non-default request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, timeout })
    }

    /// Executes `query` against `endpoint` with the default `Accept` header.
    ///
    /// The query text is opaque here: it is neither parsed nor validated,
    /// and rejecting blank input is the caller's responsibility. A malformed
    /// endpoint URL is not pre-validated either; it surfaces as a transport
    /// failure.
    pub async fn execute(&self, query: &str, endpoint: &str) -> QueryOutcome {
        self.execute_with_accept(query, endpoint, DEFAULT_ACCEPT).await
    }

    /// Executes `query` against `endpoint`, asking for `accept` results.
    pub async fn execute_with_accept(
        &self,
        query: &str,
        endpoint: &str,
        accept: &str,
    ) -> QueryOutcome {
        tracing::debug!(endpoint, accept, "executing query");

        let response = self
            .client
            .get(endpoint)
            .query(&[("query", query), ("format", "json")])
            .header(header::ACCEPT, accept)
            .timeout(self.timeout)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => return self.transport_failure(endpoint, &e),
        };

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        if !status.is_success() {
            tracing::warn!(%status, endpoint, "endpoint rejected the query");
            let detail = match response.text().await {
                Ok(body) => Some(Payload::Text(truncate_chars(&body, ERROR_DETAIL_LIMIT))),
                Err(_) => None,
            };
            return QueryOutcome::Failure {
                kind: FailureKind::HttpStatus,
                message: format!("endpoint answered {status}"),
                detail,
            };
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return self.transport_failure(endpoint, &e),
        };

        classify_body(&content_type, body)
    }

    fn transport_failure(&self, endpoint: &str, error: &reqwest::Error) -> QueryOutcome {
        if error.is_timeout() {
            tracing::warn!(endpoint, "query timed out");
            return QueryOutcome::Failure {
                kind: FailureKind::Timeout,
                message: format!(
                    "{}s elapsed contacting {endpoint}",
                    self.timeout.as_secs()
                ),
                detail: None,
            };
        }
        tracing::warn!(endpoint, error = %error, "query transport failed");
        QueryOutcome::Failure {
            kind: FailureKind::Transport,
            message: error.to_string(),
            detail: None,
        }
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
        assert_eq!(truncate_chars("short", 500), "short");
    }
}
