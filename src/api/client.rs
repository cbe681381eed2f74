//! HTTP client for communicating with the school backend
//!
//! One request per mutation: no retry, no deduplication, transport-default
//! timeouts. Validation failures arrive as a structured `errors` list and are
//! mapped onto [`RemoteError`].

use super::error::RemoteError;
use super::traits::SchoolApi;
use crate::state::{ClassOption, Resource};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Default backend address
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Structured rejection body: `{"errors":[{"error":"..."}]}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    error: String,
}

/// Class list response wrapper: `{"data":[{"id_kelas":..,"nama_kelas":..}]}`
#[derive(Debug, Deserialize)]
struct ClassListBody {
    data: Vec<ClassOption>,
}

/// Client for the school backend REST API
pub struct HttpApi {
    http: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from `SEKOLAH_API_ADDRESS`, falling back to the default
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SEKOLAH_API_ADDRESS").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

/// Map a rejected response body onto the error taxonomy.
///
/// A structured list yields its first message. Anything else, an empty list
/// included, degrades to a transport error so notification never indexes past
/// the end of the list.
fn rejection_error(status: StatusCode, body: &[u8]) -> RemoteError {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if let Some(first) = parsed.errors.into_iter().next() {
            return RemoteError::Server(first.error);
        }
    }
    RemoteError::Transport(format!("server returned {status}"))
}

#[async_trait]
impl SchoolApi for HttpApi {
    async fn create(
        &self,
        resource: Resource,
        payload: Map<String, Value>,
    ) -> Result<Value, RemoteError> {
        let url = format!("{}{}", self.base_url, resource.path());
        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        if status.is_success() {
            serde_json::from_slice(&bytes)
                .map_err(|e| RemoteError::Transport(format!("invalid response body: {e}")))
        } else {
            tracing::warn!("create {} rejected with {status}", resource.path());
            Err(rejection_error(status, &bytes))
        }
    }

    async fn list_classes(&self) -> Result<Vec<ClassOption>, RemoteError> {
        let url = format!("{}/api/classname", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Transport(format!("server returned {status}")));
        }

        let body: ClassListBody = response
            .json()
            .await
            .map_err(|e| RemoteError::Transport(format!("invalid response body: {e}")))?;
        Ok(body.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rejection_surfaces_first_structured_error() {
        let body = br#"{"errors":[{"error":"NIP sudah digunakan"},{"error":"Email sudah digunakan"}]}"#;
        assert_eq!(
            rejection_error(StatusCode::BAD_REQUEST, body),
            RemoteError::Server("NIP sudah digunakan".to_string())
        );
    }

    #[test]
    fn test_rejection_with_empty_error_list_is_transport() {
        let body = br#"{"errors":[]}"#;
        assert_eq!(
            rejection_error(StatusCode::BAD_REQUEST, body),
            RemoteError::Transport("server returned 400 Bad Request".to_string())
        );
    }

    #[test]
    fn test_rejection_with_unrecognized_body_is_transport() {
        let body = b"<html>502 Bad Gateway</html>";
        assert_eq!(
            rejection_error(StatusCode::BAD_GATEWAY, body),
            RemoteError::Transport("server returned 502 Bad Gateway".to_string())
        );
    }

    #[test]
    fn test_rejection_with_missing_errors_key_is_transport() {
        let body = br#"{"message":"boom"}"#;
        assert!(matches!(
            rejection_error(StatusCode::INTERNAL_SERVER_ERROR, body),
            RemoteError::Transport(_)
        ));
    }

    #[test]
    fn test_class_list_body_uses_backend_keys() {
        let json = r#"{"data":[{"id_kelas":1,"nama_kelas":"X IPA 1"},{"id_kelas":2,"nama_kelas":"X IPA 2"}]}"#;
        let body: ClassListBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.data.len(), 2);
        assert_eq!(body.data[0].id, 1);
        assert_eq!(body.data[0].name, "X IPA 1");
    }
}
