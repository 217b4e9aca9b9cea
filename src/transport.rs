//! Transport client
//!
//! One long-lived HTTP client per adapter process. Base URL, static headers
//! and timeout are fixed when the client is built; requests only carry a
//! path, query pairs and (for GraphQL) a JSON body.

use crate::config::AdapterConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use url::form_urlencoded;

/// HTTP verbs used by the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// A fully built outbound request, relative to the client's base URL
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    pub method: Method,
    pub path: String,
    /// Query pairs in emission order; list values appear as repeated keys
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl WireRequest {
    pub fn get(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query,
            body: None,
        }
    }

    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Url-encoded query string, without the leading `?`
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }

    /// Path plus query string, e.g. `coins/markets?vs_currency=usd`
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }

    /// Value of the first query pair named `key`
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for WireRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method.as_str(), self.target())
    }
}

/// Status and undecoded body of a completed exchange
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Performs one outbound exchange.
///
/// Implementations must be safe to share between concurrent calls. Any
/// completed exchange, whatever its status, is `Ok`; `Err` is reserved for
/// faults where no response was received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &WireRequest) -> Result<RawResponse>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the process-wide client for an adapter
    pub fn new(config: &AdapterConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.kind.static_headers() {
            headers.insert(header_name(name)?, HeaderValue::from_static(value));
        }
        if let Some((name, key)) = config.credential_header() {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| Error::Config(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(header_name(name)?, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    /// Absolute URL for a request path.
    ///
    /// The path is appended below the base URL's own path, so a leading `/`
    /// does not reset it (`https://api.elfa.ai/v1` + `/mentions` gives
    /// `https://api.elfa.ai/v1/mentions`).
    fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::Config(format!("Invalid header name {}: {}", name, e)))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &WireRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method.into(), self.url_for(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(network_error)?;
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        Ok(RawResponse { status, body })
    }
}

/// Drop the request URL from a reqwest error; DefiLlama's key is part of it.
fn network_error(error: reqwest::Error) -> Error {
    Error::Network(error.without_url())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdapterKind, Config};
    use secrecy::SecretString;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_join_url_keeps_base_path() {
        assert_eq!(
            join_url("https://api.elfa.ai/v1", "/mentions"),
            "https://api.elfa.ai/v1/mentions"
        );
        assert_eq!(
            join_url("https://pro-api.coingecko.com/api/v3", "coins/markets"),
            "https://pro-api.coingecko.com/api/v3/coins/markets"
        );
        assert_eq!(
            join_url("https://pro-api.llama.fi/KEY", "/api/protocols"),
            "https://pro-api.llama.fi/KEY/api/protocols"
        );
    }

    #[test]
    fn test_target_repeats_list_keys() {
        let request = WireRequest::get(
            "/swaps",
            vec![
                ("chains".to_string(), "ethereum".to_string()),
                ("chains".to_string(), "base".to_string()),
                ("limit".to_string(), "5".to_string()),
            ],
        );
        assert_eq!(request.target(), "/swaps?chains=ethereum&chains=base&limit=5");
        assert_eq!(request.to_string(), "GET /swaps?chains=ethereum&chains=base&limit=5");
        assert_eq!(request.query_value("chains"), Some("ethereum"));
    }

    #[test]
    fn test_target_without_query() {
        let request = WireRequest::post_json("/graphql", json!({"query": "{ x }"}));
        assert_eq!(request.target(), "/graphql");
        assert_eq!(request.method, Method::Post);
    }

    #[test]
    fn test_query_string_escapes_values() {
        let request = WireRequest::get(
            "search",
            vec![("query".to_string(), "wrapped eth&co".to_string())],
        );
        assert_eq!(request.query_string(), "query=wrapped+eth%26co");
    }

    /// Serve a single canned HTTP response and hand back the raw request text.
    async fn serve_once(response: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf[..n]).to_string()
        });
        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_http_transport_sends_headers_and_query() {
        let (base, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
        )
        .await;

        let mut config = Config::default();
        config
            .base_urls
            .insert(AdapterKind::CoinGecko, format!("{}/api/v3/", base));
        let adapter_config = AdapterConfig::resolve(
            AdapterKind::CoinGecko,
            &config,
            Some(SecretString::from("cg-key".to_string())),
        )
        .unwrap();
        let transport = HttpTransport::new(&adapter_config).unwrap();

        let response = transport
            .send(&WireRequest::get(
                "coins/bitcoin",
                vec![("tickers".to_string(), "false".to_string())],
            ))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, "not found");

        let raw = server.await.unwrap().to_lowercase();
        assert!(raw.starts_with("get /api/v3/coins/bitcoin?tickers=false http/1.1"));
        assert!(raw.contains("x-cg-pro-api-key: cg-key"));
        assert!(raw.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn test_http_transport_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let addr = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap();

        let mut config = Config::default();
        config
            .base_urls
            .insert(AdapterKind::Arkham, format!("http://{}", addr));
        let adapter_config = AdapterConfig::resolve(AdapterKind::Arkham, &config, None).unwrap();
        let transport = HttpTransport::new(&adapter_config).unwrap();

        let result = transport.send(&WireRequest::get("/tag/top", vec![])).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_network_failure_hides_path_key() {
        let addr = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap();

        let mut config = Config::default();
        config
            .base_urls
            .insert(AdapterKind::DefiLlama, format!("http://{}", addr));
        let adapter_config = AdapterConfig::resolve(
            AdapterKind::DefiLlama,
            &config,
            Some(SecretString::from("llama-secret-key".to_string())),
        )
        .unwrap();
        assert!(adapter_config.base_url().contains("llama-secret-key"));
        let transport = HttpTransport::new(&adapter_config).unwrap();
        let llama = crate::Adapter::new(AdapterKind::DefiLlama, std::sync::Arc::new(transport));

        let (text, is_error) = llama
            .call_text("get_protocols", &serde_json::Map::new())
            .await;

        assert!(is_error);
        assert!(text.starts_with("Error: Network error"));
        assert!(!text.contains("llama-secret-key"));
    }
}
