use async_trait::async_trait;
use contracts::shared::HttpMethod;
use serde_json::Value;

use super::error::ApiError;
use super::record::Draft;

/// Backend seam of the list core.
///
/// Implemented over HTTP by [`crate::shared::api_utils::HttpRemote`]; tests
/// substitute a recording mock. Futures are not `Send`, the browser runs
/// everything on one thread.
#[async_trait(?Send)]
pub trait RemoteSource {
    /// `GET` a list endpoint and return the raw body
    async fn fetch_list(&self, path: &str) -> Result<Value, ApiError>;

    /// Issue a mutation, any 2xx is success
    async fn send(&self, method: HttpMethod, path: &str, body: Option<&Draft>) -> Result<(), ApiError>;
}
