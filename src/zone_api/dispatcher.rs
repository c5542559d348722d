use crate::zone_api::error::ApiError;
use reqwest::header::HeaderMap;
use reqwest::Method;
use tracing::debug;

/// The shared transport seam: authentication, connection reuse and raw
/// request/response handling live behind this trait, not in the bindings.
pub trait Dispatcher {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, ApiError>> + Send;
}

// Implement Dispatcher for shared references so a dispatcher can be borrowed
// by several clients at once
impl<T> Dispatcher for &T
where
    T: Dispatcher + Sync,
{
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ApiError> {
        (*self).send(method, path, body).await
    }
}

#[derive(Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDispatcher {
    pub fn new(base_url: &str, api_token: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            format!("Bearer {}", api_token).parse().unwrap(),
        );

        Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .unwrap(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Dispatcher for HttpDispatcher {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "dispatching request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = request.send().await?;
        let contents = response.bytes().await?;
        Ok(contents.to_vec())
    }
}
