//! Async loan API operations.
//!
//! `LoanApi` pairs a `LoanClient` with a `Transport`. Every operation sends
//! exactly one request: no retry, no caching, no deduplication. Concurrent
//! calls are independent and complete in whatever order the server answers.

use std::fmt;

use tracing::debug;

use crate::client::LoanClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{CalculateRequest, CalculateResponse, DsrRequest, DsrResponse};

/// Failure of a `LoanApi` call.
#[derive(Debug)]
pub enum CallError<E> {
    /// The transport could not complete the exchange (connection refused,
    /// DNS failure, timeout). Carries the transport's own error.
    Transport(E),

    /// The exchange completed but the status or payload was unusable.
    Api(ApiError),
}

impl<E> From<ApiError> for CallError<E> {
    fn from(err: ApiError) -> Self {
        CallError::Api(err)
    }
}

impl<E: fmt::Display> fmt::Display for CallError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::Transport(err) => write!(f, "transport error: {err}"),
            CallError::Api(err) => write!(f, "{err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for CallError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CallError::Transport(err) => Some(err),
            CallError::Api(err) => Some(err),
        }
    }
}

/// Async client for the loan calculation API.
#[derive(Debug, Clone)]
pub struct LoanApi<T> {
    client: LoanClient,
    transport: T,
}

impl<T: Transport> LoanApi<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: LoanClient::from_config(config),
            transport,
        }
    }

    pub fn client(&self) -> &LoanClient {
        &self.client
    }

    pub async fn calculate_loan(
        &self,
        input: &CalculateRequest,
    ) -> Result<CalculateResponse, CallError<T::Error>> {
        let request = self.client.build_calculate_loan(input)?;
        let response = self.execute(request).await?;
        Ok(self.client.parse_calculate_loan(response)?)
    }

    pub async fn calculate_dsr(&self, input: &DsrRequest) -> Result<DsrResponse, CallError<T::Error>> {
        let request = self.client.build_calculate_dsr(input)?;
        let response = self.execute(request).await?;
        Ok(self.client.parse_calculate_dsr(response)?)
    }

    pub async fn ping(&self) -> Result<String, CallError<T::Error>> {
        let response = self.execute(self.client.build_ping()).await?;
        Ok(self.client.parse_ping(response)?)
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, CallError<T::Error>> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.send(request).await.map_err(CallError::Transport)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
