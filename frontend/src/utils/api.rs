use futures::future::{self, Either};
use futures::pin_mut;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Thin client for calling third-party HTTP APIs from the browser
pub struct Api;

/// Request wrapper that adds JSON bodies and an optional deadline
pub struct RequestWrapper {
    request: Request,
    url: String,
    timeout_ms: Option<u32>,
}

impl RequestWrapper {
    fn new(url: &str) -> Self {
        Self {
            request: Request::post(url),
            url: url.to_string(),
            timeout_ms: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, ApiError> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    /// Give up on the request once `ms` milliseconds have passed
    pub fn timeout(mut self, ms: u32) -> Self {
        self.timeout_ms = Some(ms);
        self
    }

    /// Send the request, racing it against the deadline if one was set
    pub async fn send(self) -> Result<Response, ApiError> {
        // Only the path is logged; query strings may carry credentials.
        let path = self.url.split('?').next().unwrap_or_default().to_string();
        log::debug!("POST {}", path);

        let request = self.request;
        let send = async move {
            request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))
        };

        match self.timeout_ms {
            Some(ms) => with_timeout(send, TimeoutFuture::new(ms), ms).await,
            None => send.await,
        }
    }
}

impl Api {
    /// Create a POST request against an absolute URL
    pub fn post(url: &str) -> RequestWrapper {
        RequestWrapper::new(url)
    }
}

/// Resolve `work`, or fail with [`ApiError::Timeout`] if `deadline` fires first.
pub async fn with_timeout<T, W, D>(work: W, deadline: D, ms: u32) -> Result<T, ApiError>
where
    W: Future<Output = Result<T, ApiError>>,
    D: Future<Output = ()>,
{
    pin_mut!(work);
    pin_mut!(deadline);
    match future::select(work, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(ms)),
    }
}
