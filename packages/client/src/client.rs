//! The [`CyRestClient`] and its request plumbing.
//!
//! Every high-level operation in this crate ends in one of the transport
//! methods defined here: [`CyRestClient::get`], [`CyRestClient::post`],
//! [`CyRestClient::put`], [`CyRestClient::delete`] or
//! [`CyRestClient::command`].
//!
//! # Error mapping
//!
//! - Connection failures surface as [`CyError::Http`].
//! - Non-2xx statuses surface as [`CyError::Status`], carrying the message
//!   from the CyREST error body when one is present.
//! - A 2xx command response with a non-empty `errors` list surfaces as
//!   [`CyError::Command`].
//! - Bodies that do not match the expected type surface as
//!   [`CyError::Decode`].

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use cyrest_api::{CommandResponse, ErrorResponse, VersionInfo};

use crate::command::Command;
use crate::config::ClientConfig;
use crate::error::{CyError, Result};

/// Async handle on one Cytoscape instance.
///
/// Holds a cloneable [`reqwest::Client`] (which pools connections
/// internally), so a `CyRestClient` is cheap to clone and share.
#[derive(Debug, Clone)]
pub struct CyRestClient {
    http: Client,
    base_url: String,
}

impl CyRestClient {
    /// Build a client from a [`ClientConfig`].
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::from_parts(http, &config.base_url))
    }

    /// Build a client for `base_url` with the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(&ClientConfig::new(base_url))
    }

    /// Wrap a pre-configured `reqwest::Client` (e.g. one with a proxy).
    pub fn from_parts(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    fn request(&self, method: Method, path: &str, query: &[(&str, String)]) -> RequestBuilder {
        debug!(%method, path, "cyrest request");
        let mut req = self.http.request(method, self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        req
    }

    /// `GET {base}/{path}` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self.request(Method::GET, path, query).send().await?;
        decode(check(response, "GET", path).await?, path).await
    }

    /// `POST {base}/{path}` with a JSON body and decode the JSON response.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(Method::POST, path, query)
            .json(body)
            .send()
            .await?;
        decode(check(response, "POST", path).await?, path).await
    }

    /// `PUT {base}/{path}` with a JSON body. The response body is ignored.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let response = self.request(Method::PUT, path, &[]).json(body).send().await?;
        check(response, "PUT", path).await?;
        Ok(())
    }

    /// `DELETE {base}/{path}`. The response body is not required to be JSON
    /// and is ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path, &[]).send().await?;
        check(response, "DELETE", path).await?;
        Ok(())
    }

    /// Run a command and decode its `data` section as `T`.
    pub async fn command<T: DeserializeOwned>(&self, command: &Command) -> Result<T> {
        debug!(command = %command, "cyrest command");
        let path = command.path();
        let envelope: CommandResponse<Value> = self.post(&path, &[], command.args()).await?;
        if !envelope.errors.is_empty() {
            return Err(CyError::Command {
                command: command.to_string(),
                errors: envelope.error_messages(),
            });
        }
        serde_json::from_value(envelope.data).map_err(|source| CyError::Decode { path, source })
    }

    /// Run a command whose `data` the caller does not need.
    pub async fn command_unit(&self, command: &Command) -> Result<()> {
        let _: Value = self.command(command).await?;
        Ok(())
    }

    /// `GET {base}`: the API and Cytoscape versions. Doubles as a liveness
    /// check.
    pub async fn version(&self) -> Result<VersionInfo> {
        self.get("", &[]).await
    }
}

/// Turn a non-2xx response into [`CyError::Status`].
async fn check(response: Response, method: &str, path: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|e| e.message())
        .unwrap_or_else(|| {
            if body.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            }
        });
    Err(CyError::Status {
        method: method.to_string(),
        path: path.to_string(),
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| CyError::Decode {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use tokio::net::TcpListener;

    /// Spawn a loopback axum server and return its base URL (e.g. `http://127.0.0.1:PORT/v1`).
    async fn spawn_mock_server(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1")
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let c = CyRestClient::with_base_url("http://localhost:1234/v1/").unwrap();
        assert_eq!(c.url(""), "http://localhost:1234/v1");
        assert_eq!(c.url("networks"), "http://localhost:1234/v1/networks");
        assert_eq!(c.url("/networks/count"), "http://localhost:1234/v1/networks/count");
    }

    #[tokio::test]
    async fn version_decodes_root_document() {
        let app = Router::new().route(
            "/v1",
            get(|| async {
                Json(serde_json::json!({"apiVersion": "v1", "cytoscapeVersion": "3.10.2"}))
            }),
        );
        let base = spawn_mock_server(app).await;
        let client = CyRestClient::with_base_url(base).unwrap();
        let v = client.version().await.unwrap();
        assert_eq!(v.api_version, "v1");
    }

    #[tokio::test]
    async fn error_body_message_is_surfaced() {
        let app = Router::new().route(
            "/v1/networks/99",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse::new(404, "urn:test", "Network 99 not found")),
                )
            }),
        );
        let base = spawn_mock_server(app).await;
        let client = CyRestClient::with_base_url(base).unwrap();
        let err = client.get::<Value>("networks/99", &[]).await.unwrap_err();
        match err {
            CyError::Status { status, message, .. } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Network 99 not found");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn command_errors_become_command_error() {
        let app = Router::new().route(
            "/v1/commands/network/rename",
            post(|| async {
                Json(serde_json::json!({"data": {}, "errors": ["Duplicate network name"]}))
            }),
        );
        let base = spawn_mock_server(app).await;
        let client = CyRestClient::with_base_url(base).unwrap();
        let err = client
            .command_unit(&Command::new("network rename").arg("name", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, CyError::Command { ref errors, .. } if errors[0] == "Duplicate network name"));
    }

    #[tokio::test]
    async fn command_data_is_decoded() {
        let app = Router::new().route(
            "/v1/commands/network/clone",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["network"], "SUID:52");
                Json(serde_json::json!({"data": {"network": 1502}, "errors": []}))
            }),
        );
        let base = spawn_mock_server(app).await;
        let client = CyRestClient::with_base_url(base).unwrap();
        let out: cyrest_api::NetworkResult = client
            .command(&Command::new("network clone").arg("network", "SUID:52"))
            .await
            .unwrap();
        assert_eq!(out.network, cyrest::Suid(1502));
    }

    #[tokio::test]
    async fn delete_ignores_non_json_body() {
        let app = Router::new().route("/v1/networks", axum::routing::delete(|| async { "" }));
        let base = spawn_mock_server(app).await;
        let client = CyRestClient::with_base_url(base).unwrap();
        client.delete("networks").await.unwrap();
    }
}
