//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and the HTTP
//! implementation of [`RemoteSource`].

use async_trait::async_trait;
use contracts::shared::{extract_error_message, HttpMethod};
use gloo_net::http::{Request, Response};
use serde_json::Value;

use super::config::ApiSettings;
use super::list_core::{ApiError, Draft, RemoteSource};

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// JSON-over-HTTP backend
#[derive(Debug, Clone)]
pub struct HttpRemote {
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Configured base URL, or the window-derived one when left empty
    pub fn from_settings(settings: &ApiSettings) -> Self {
        if settings.base_url.trim().is_empty() {
            Self::new(api_base())
        } else {
            Self::new(settings.base_url.trim())
        }
    }

    /// Build a full API URL from a path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status {
        status,
        message: extract_error_message(&body),
    }
}

#[async_trait(?Send)]
impl RemoteSource for HttpRemote {
    async fn fetch_list(&self, path: &str) -> Result<Value, ApiError> {
        let response = Request::get(&self.url(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send(&self, method: HttpMethod, path: &str, body: Option<&Draft>) -> Result<(), ApiError> {
        let url = self.url(path);
        let builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        let sent = match body {
            Some(draft) => {
                builder
                    .json(draft)
                    .map_err(|e| ApiError::Decode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let remote = HttpRemote::new("https://ops.example.com:3000/");
        assert_eq!(
            remote.url("/api/jobs/"),
            "https://ops.example.com:3000/api/jobs/"
        );
    }

    #[test]
    fn test_configured_base_url_wins() {
        let settings = ApiSettings {
            base_url: "http://10.0.0.5:8000".into(),
        };
        assert_eq!(
            HttpRemote::from_settings(&settings).url("/api/tickets/"),
            "http://10.0.0.5:8000/api/tickets/"
        );
    }
}
