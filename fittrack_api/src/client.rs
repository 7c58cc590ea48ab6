//! HTTP client for the FitTrack application API.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{envelope, CancelToken, Error, LoadingTracker};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for the FitTrack application API.
///
/// Every call goes through [`Client::call`], which normalizes the endpoint,
/// tracks the shared in-flight counter, and unwraps the response envelope.
/// The convenience verbs (`get`, `post`, ...) are thin layers over it.
pub struct Client {
    base_api_url: String,
    http: reqwest::Client,
    loading: LoadingTracker,
}

/// Per-request configuration for [`Client::call`].
pub struct RequestOptions {
    pub method: Method,
    /// JSON body, sent for POST/PUT/PATCH only.
    pub body: Option<Value>,
    /// Extra headers; these override the JSON content-type default.
    pub headers: Vec<(String, String)>,
    /// Optional cooperative cancellation token.
    pub cancel: Option<CancelToken>,
    /// Suppresses the in-flight counter for this request.
    pub skip_loading: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
            cancel: None,
            skip_loading: false,
        }
    }
}

impl RequestOptions {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn skip_loading(mut self) -> Self {
        self.skip_loading = true;
        self
    }
}

/// Normalizes an endpoint to its request path.
///
/// Absolute URLs pass through unchanged, as do paths already under `/api/`;
/// everything else is prefixed with the API root, so `"exercises"` and
/// `"/exercises"` both resolve to `/api/exercises`.
pub fn resolve_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else if endpoint.starts_with("/api/") {
        endpoint.to_string()
    } else if let Some(rest) = endpoint.strip_prefix('/') {
        format!("/api/{rest}")
    } else {
        format!("/api/{endpoint}")
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Also used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            loading: LoadingTracker::new(),
        }
    }

    /// Creates a client from the `FITTRACK_API_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        match std::env::var("FITTRACK_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::new(),
        }
    }

    /// Replaces the loading tracker, so several clients (or a UI layer) can
    /// share one in-flight counter.
    pub fn with_loading(mut self, loading: LoadingTracker) -> Self {
        self.loading = loading;
        self
    }

    /// The tracker observed by this client's requests.
    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    fn request_url(&self, endpoint: &str) -> Result<Url, Error> {
        let resolved = resolve_endpoint(endpoint);
        let absolute = if resolved.starts_with("http://") || resolved.starts_with("https://") {
            resolved
        } else {
            format!("{}{}", self.base_api_url, resolved)
        };
        Url::parse(&absolute).map_err(|e| {
            tracing::error!("invalid URL for endpoint {}: {}", endpoint, e);
            Error::Transport(e.to_string())
        })
    }

    /// Issues a request and returns the unwrapped, deserialized payload.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, Error> {
        // Guard decrements on every exit path, cancellation included.
        let _guard = (!options.skip_loading).then(|| self.loading.start());

        let url = self.request_url(endpoint)?;
        let mut request = self
            .http
            .request(options.method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &options.body {
            let writes_body = options.method == Method::POST
                || options.method == Method::PUT
                || options.method == Method::PATCH;
            if writes_body {
                request = request.json(body);
            }
        }

        let exchange = async {
            let response = request.send().await.map_err(|e| {
                tracing::error!("request to {} failed: {}", endpoint, e);
                Error::Transport(e.to_string())
            })?;
            let status = response.status();
            let body = response.text().await.map_err(|e| {
                tracing::error!("failed to read response body from {}: {}", endpoint, e);
                Error::Transport(e.to_string())
            })?;
            Ok::<(StatusCode, String), Error>((status, body))
        };

        let (status, body) = match &options.cancel {
            Some(token) => tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("request to {} cancelled", endpoint);
                    return Err(Error::Cancelled);
                }
                result = exchange => result?,
            },
            None => exchange.await?,
        };

        if !status.is_success() {
            let message = error_message(&body, status);
            tracing::error!(
                "request to {} failed with status {}: {}",
                endpoint,
                status,
                message
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        envelope::decode(&body)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        self.call(endpoint, RequestOptions::default()).await
    }

    pub async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T, Error> {
        self.call(
            endpoint,
            RequestOptions::default()
                .with_method(Method::POST)
                .with_body(body),
        )
        .await
    }

    pub async fn put<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T, Error> {
        self.call(
            endpoint,
            RequestOptions::default()
                .with_method(Method::PUT)
                .with_body(body),
        )
        .await
    }

    pub async fn patch<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T, Error> {
        self.call(
            endpoint,
            RequestOptions::default()
                .with_method(Method::PATCH)
                .with_body(body),
        )
        .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        self.call(endpoint, RequestOptions::default().with_method(Method::DELETE))
            .await
    }

    /// Fetches several endpoints in parallel, failing fast on the first error.
    pub async fn get_many<T: DeserializeOwned>(
        &self,
        endpoints: &[&str],
    ) -> Result<Vec<T>, Error> {
        futures::future::try_join_all(endpoints.iter().map(|endpoint| self.get::<T>(endpoint)))
            .await
    }

    /// GET variant that logs the failure and returns `None` instead of an
    /// error, for callers that treat a missing payload as absence.
    pub async fn get_or_none<T: DeserializeOwned>(&self, endpoint: &str) -> Option<T> {
        match self.get(endpoint).await {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::error!("failed to fetch {}: {}", endpoint, e);
                None
            }
        }
    }
}

/// Best-effort extraction of a human-readable message from an error body.
fn error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            format!(
                "API error: {}",
                status.canonical_reason().unwrap_or("unknown status")
            )
        })
}
