//! Stdio tool server
//!
//! Speaks newline-delimited JSON-RPC 2.0 on stdin/stdout. Each request is
//! handled on its own task so slow upstream calls do not block the others;
//! responses are written by a single writer task in completion order. On end
//! of input the server stops reading, lets in-flight calls finish and exits.

pub mod protocol;

use std::sync::Arc;

use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::adapter::Adapter;
use crate::Result;
use protocol::{
    error_codes, methods, JsonRpcId, JsonRpcRequest, JsonRpcResponse, ToolCallParams,
    PROTOCOL_VERSION,
};

#[derive(Clone)]
pub struct Server {
    adapter: Arc<Adapter>,
}

impl Server {
    pub fn new(adapter: Adapter) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }

    /// Serve on the process's stdin and stdout until stdin closes
    pub async fn run(self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let writer_task = tokio::spawn(write_responses(rx, writer));

        tracing::info!(adapter = %self.adapter.kind(), "Server ready, waiting for requests");

        let mut lines = BufReader::new(reader).lines();
        let mut in_flight = JoinSet::new();
        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            tracing::debug!(request = %trimmed, "Received");

            let server = self.clone();
            let tx = tx.clone();
            let line = trimmed.to_string();
            in_flight.spawn(async move {
                let Some(response) = server.handle_line(&line).await else {
                    return;
                };
                match serde_json::to_string(&response) {
                    Ok(json) => {
                        // Writer only goes away on a broken stdout
                        let _ = tx.send(json);
                    }
                    Err(e) => tracing::error!(error = %e, "Failed to serialize response"),
                }
            });

            while let Some(done) = in_flight.try_join_next() {
                log_task_result(done);
            }
        }

        tracing::info!(in_flight = in_flight.len(), "stdin closed, draining in-flight calls");
        while let Some(done) = in_flight.join_next().await {
            log_task_result(done);
        }
        drop(tx);

        match writer_task.await {
            Ok(result) => result?,
            Err(e) => return Err(std::io::Error::other(e).into()),
        }
        tracing::info!("Server exiting");
        Ok(())
    }

    /// Parse and handle one line; `None` when no response is due
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                None,
                error_codes::PARSE_ERROR,
                format!("Parse error: {}", e),
            )),
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            tracing::debug!(method = %request.method, "Notification");
            return None;
        };
        let id = Some(id);

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                "Invalid Request: jsonrpc must be \"2.0\"",
            ));
        }

        let response = match request.method.as_str() {
            methods::INITIALIZE => JsonRpcResponse::success(id, self.initialize(request.params)),
            methods::PING => JsonRpcResponse::success(id, json!({})),
            methods::TOOLS_LIST => JsonRpcResponse::success(id, self.list_tools()),
            methods::TOOLS_CALL => self.call_tool(id, request.params).await,
            methods::INITIALIZED => return None,
            other => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        };
        Some(response)
    }

    fn initialize(&self, params: Option<Value>) -> Value {
        let version = params
            .as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(PROTOCOL_VERSION)
            .to_string();
        json!({
            "protocolVersion": version,
            "capabilities": {"tools": {"listChanged": false}},
            "serverInfo": {
                "name": self.adapter.kind().name(),
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn list_tools(&self) -> Value {
        let tools: Vec<Value> = self
            .adapter
            .operations()
            .iter()
            .map(|op| {
                json!({
                    "name": op.name,
                    "description": op.description,
                    "inputSchema": op.input_schema()
                })
            })
            .collect();
        json!({ "tools": tools })
    }

    async fn call_tool(&self, id: Option<JsonRpcId>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid params: {}", e),
                )
            }
            None => {
                return JsonRpcResponse::error(id, error_codes::INVALID_PARAMS, "Missing params")
            }
        };

        let arguments = match params.arguments {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(arguments)) => arguments,
            Some(_) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Invalid params: arguments must be an object",
                )
            }
        };

        tracing::info!(tool = %params.name, "Tool call");
        let (text, is_error) = self.adapter.call_text(&params.name, &arguments).await;
        JsonRpcResponse::success(
            id,
            json!({
                "content": [{"type": "text", "text": text}],
                "isError": is_error
            }),
        )
    }
}

async fn write_responses<W>(mut rx: mpsc::UnboundedReceiver<String>, mut writer: W) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = rx.recv().await {
        tracing::debug!(response = %line, "Sending");
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}

fn log_task_result(result: std::result::Result<(), tokio::task::JoinError>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "Request task failed");
    }
}
