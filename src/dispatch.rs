//! Request dispatcher
//!
//! Issues exactly one outbound call per request and folds every way it can go
//! wrong into a [`ResultValue::Failure`]. Nothing is retried.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::config::FailureStyle;
use crate::params::graphql_request;
use crate::transport::{Method, Transport, WireRequest};
use crate::{Error, Result};

/// Outcome of a call: decoded JSON, locally produced text, or the reason it
/// failed
#[derive(Debug)]
pub enum ResultValue {
    Success(Value),
    Text(String),
    Failure(Error),
}

impl ResultValue {
    pub fn is_failure(&self) -> bool {
        matches!(self, ResultValue::Failure(_))
    }

    /// Text handed back to the caller.
    ///
    /// Local text is returned as-is; decoded JSON, bare strings included, is
    /// serialized compactly.
    pub fn render(&self, style: FailureStyle) -> String {
        match self {
            ResultValue::Text(text) => text.clone(),
            ResultValue::Success(value) => value.to_string(),
            ResultValue::Failure(error) => render_failure(error, style),
        }
    }
}

impl From<Result<Value>> for ResultValue {
    fn from(result: Result<Value>) -> Self {
        match result {
            Ok(value) => ResultValue::Success(value),
            Err(error) => ResultValue::Failure(error),
        }
    }
}

fn render_failure(error: &Error, style: FailureStyle) -> String {
    match style {
        FailureStyle::Plain => format!("Error: {}", error),
        FailureStyle::JsonEnvelope => {
            let message = match error {
                Error::Remote { status, body } => {
                    format!("HTTP error occurred: {} - {}", status.as_u16(), body)
                }
                other => format!("Error: {}", other),
            };
            json!({ "error": message }).to_string()
        }
    }
}

/// Sends built requests over a shared transport
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send one request and decode its JSON body
    pub async fn dispatch(&self, request: &WireRequest) -> ResultValue {
        tracing::debug!(request = %request, "Dispatching");
        let result = self.try_dispatch(request).await;
        if let Err(e) = &result {
            tracing::warn!(request = %request, error = %e, "Request failed");
        }
        result.into()
    }

    /// REST call
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
    ) -> ResultValue {
        let request = WireRequest {
            method,
            path: path.to_string(),
            query,
            body: None,
        };
        self.dispatch(&request).await
    }

    /// GraphQL call; a 2xx body is a success even when it carries `errors`
    pub async fn execute_graphql(&self, document: &str, variables: Map<String, Value>) -> ResultValue {
        self.dispatch(&graphql_request(document, variables)).await
    }

    async fn try_dispatch(&self, request: &WireRequest) -> Result<Value> {
        let response = self.transport.send(request).await?;
        if !response.status.is_success() {
            return Err(Error::Remote {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::RecordingTransport;
    use reqwest::StatusCode;

    fn dispatcher(transport: RecordingTransport) -> (Dispatcher, Arc<RecordingTransport>) {
        let transport = Arc::new(transport);
        (Dispatcher::new(transport.clone()), transport)
    }

    #[tokio::test]
    async fn test_success_decodes_json() {
        let (dispatcher, transport) = dispatcher(RecordingTransport::ok(r#"{"bitcoin":{"usd":1}}"#));

        let result = dispatcher
            .execute(Method::Get, "simple/price", vec![("ids".into(), "bitcoin".into())])
            .await;

        assert_eq!(
            result.render(FailureStyle::Plain),
            r#"{"bitcoin":{"usd":1}}"#
        );
        assert_eq!(transport.calls(), 1);
        assert_eq!(
            transport.last_request().unwrap().target(),
            "simple/price?ids=bitcoin"
        );
    }

    #[tokio::test]
    async fn test_not_found_is_failure_with_status() {
        let (dispatcher, transport) =
            dispatcher(RecordingTransport::new(StatusCode::NOT_FOUND, "no such coin"));

        let result = dispatcher.execute(Method::Get, "coins/nope", vec![]).await;

        assert!(result.is_failure());
        let text = result.render(FailureStyle::Plain);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("404"));
        assert!(text.contains("no such coin"));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_failure() {
        let (dispatcher, _) = dispatcher(RecordingTransport::ok("<html>oops</html>"));

        let result = dispatcher.execute(Method::Get, "/tag/top", vec![]).await;

        assert!(matches!(result, ResultValue::Failure(Error::Json(_))));
    }

    #[tokio::test]
    async fn test_transport_fault_is_failure() {
        let (dispatcher, _) = dispatcher(RecordingTransport::fault("connection reset"));

        let result = dispatcher.execute(Method::Get, "/tag/top", vec![]).await;

        assert_eq!(
            result.render(FailureStyle::Plain),
            "Error: Transport error: connection reset"
        );
    }

    #[tokio::test]
    async fn test_graphql_errors_array_is_success() {
        let body = r#"{"data":null,"errors":[{"message":"bad filter"}]}"#;
        let (dispatcher, transport) = dispatcher(RecordingTransport::ok(body));

        let mut variables = Map::new();
        variables.insert("limit".into(), json!(10));
        variables.insert("phrase".into(), Value::Null);
        let result = dispatcher.execute_graphql("query { x }", variables).await;

        assert!(!result.is_failure());
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/graphql");
        assert_eq!(request.body.unwrap()["variables"], json!({"limit": 10}));
    }

    #[tokio::test]
    async fn test_graphql_http_error_envelope() {
        let (dispatcher, _) =
            dispatcher(RecordingTransport::new(StatusCode::UNAUTHORIZED, "bad key"));

        let result = dispatcher.execute_graphql("query { x }", Map::new()).await;
        let rendered: Value =
            serde_json::from_str(&result.render(FailureStyle::JsonEnvelope)).unwrap();

        assert_eq!(rendered, json!({"error": "HTTP error occurred: 401 - bad key"}));
    }

    #[test]
    fn test_fault_envelope() {
        let result = ResultValue::Failure(Error::Transport("timed out".into()));
        let rendered: Value =
            serde_json::from_str(&result.render(FailureStyle::JsonEnvelope)).unwrap();
        assert_eq!(rendered, json!({"error": "Error: Transport error: timed out"}));
    }

    #[test]
    fn test_local_text_rendered_verbatim() {
        let result = ResultValue::Text("Date: x\nUNIX timestamp: 1".to_string());
        assert_eq!(result.render(FailureStyle::Plain), "Date: x\nUNIX timestamp: 1");
    }

    #[tokio::test]
    async fn test_remote_string_payload_stays_json() {
        let (dispatcher, _) = dispatcher(RecordingTransport::ok(r#""ok""#));

        let result = dispatcher.execute(Method::Get, "/ping", vec![]).await;

        assert_eq!(result.render(FailureStyle::Plain), r#""ok""#);
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_transport() {
        let (dispatcher, transport) = dispatcher(RecordingTransport::ok("[]"));

        let calls = (0..8).map(|i| {
            let dispatcher = dispatcher.clone();
            async move {
                dispatcher
                    .execute(Method::Get, &format!("/tx/{}", i), vec![])
                    .await
            }
        });
        let results = futures::future::join_all(calls).await;

        assert!(results.iter().all(|r| !r.is_failure()));
        assert_eq!(transport.calls(), 8);
    }
}
