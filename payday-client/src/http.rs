//! HTTP transport
//!
//! `HttpClient` is the seam between the typed endpoint wrappers and the
//! network; tests substitute a scripted implementation. `RestClient` is the
//! real reqwest-backed transport: JSON in, JSON out, every failure written
//! to the tracing sink before it is handed back to the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ApiError, ApiResult, ClientConfig};

/// Error body shape the backend uses for non-success responses.
#[derive(serde::Deserialize)]
struct BackendError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// JSON transport trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T>;
    async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T>;
    async fn delete(&self, path: &str) -> ApiResult<()>;
}

/// Network transport over reqwest
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<reqwest::Response> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(path, error = %e, "request failed");
                return Err(ApiError::Http(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<BackendError>(&text)
                .ok()
                .and_then(|body| body.message.or(body.error))
                .unwrap_or(text);
            tracing::error!(path, status = status.as_u16(), %message, "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<T> {
        let response = self.execute(path, request).await?;
        response.json().await.map_err(|e| {
            tracing::error!(path, error = %e, "response decode failed");
            ApiError::Http(e)
        })
    }
}

#[async_trait]
impl HttpClient for RestClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute_json(path, self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.execute_json(path, self.client.post(self.url(path)).json(body))
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.execute_json(path, self.client.put(self.url(path)).json(body))
            .await
    }

    async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        self.execute_json(path, self.client.patch(self.url(path)).query(query))
            .await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        // Delete responses are empty (204) on this backend; only the status
        // matters.
        self.execute(path, self.client.delete(self.url(path))).await?;
        Ok(())
    }
}
