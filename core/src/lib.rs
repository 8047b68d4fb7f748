//! API client core for the loan affordability service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the two
//! calculation endpoints (`/calculate` and `/dsr`) without touching the
//! network. `LoanApi` layers async execution on top through a pluggable
//! `Transport`; `ReqwestTransport` is the stock implementation.
//!
//! # Design
//! - `LoanClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `catalog` carries the static display tables (expense categories and
//!   DSR status styles) shared with presentation code.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::{CallError, LoanApi};
pub use client::LoanClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    BudgetComparison, CalculateRequest, CalculateResponse, DsrRequest, DsrResponse, DsrStatus,
    ExpenseItem, Suggestion, SuggestionKind,
};
