//! Executes `HttpRequest` values over the network.
//!
//! # Design
//! `Transport` is the seam between the I/O-free client and a real HTTP
//! stack. Implementations report failures with their own error type; the
//! API layer hands that error back to the caller unchanged.

use std::future::Future;

use reqwest::Method;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one HTTP exchange per call.
///
/// Non-2xx statuses are data, not errors: they must come back as an
/// `HttpResponse` so the client can interpret them.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, Self::Error>> + Send;
}

/// `Transport` backed by an async `reqwest::Client`.
///
/// Requests built from a relative base (the default `/api`) need an origin
/// to resolve against; absolute paths are sent as-is.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    origin: Option<String>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http, origin: None }
    }

    /// Resolve relative paths against `origin`, e.g. `http://localhost:8000`.
    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = Some(origin.trim_end_matches('/').to_string());
        self
    }

    fn resolve(&self, path: &str) -> String {
        match &self.origin {
            Some(origin) if path.starts_with('/') => format!("{origin}{path}"),
            _ => path.to_string(),
        }
    }
}

impl Transport for ReqwestTransport {
    type Error = reqwest::Error;

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };
        let mut builder = self.http.request(method, self.resolve(&request.path));
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
