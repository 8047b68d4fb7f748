//! Stateless HTTP request builder and response parser for the loan API.
//!
//! # Design
//! `LoanClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping this layer
//! deterministic and free of I/O.
//!
//! Parsing is lenient: a 2xx body is decoded straight into the response type
//! with no further checks on the values it carries.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CalculateRequest, CalculateResponse, DsrRequest, DsrResponse};

pub const CALCULATE_PATH: &str = "/calculate";
pub const DSR_PATH: &str = "/dsr";
pub const PING_PATH: &str = "/test";

/// Synchronous, stateless client for the loan calculation API.
#[derive(Debug, Clone)]
pub struct LoanClient {
    base_url: String,
}

impl LoanClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_calculate_loan(&self, input: &CalculateRequest) -> Result<HttpRequest, ApiError> {
        self.build_json_post(CALCULATE_PATH, input)
    }

    pub fn parse_calculate_loan(&self, response: HttpResponse) -> Result<CalculateResponse, ApiError> {
        parse_json(response)
    }

    pub fn build_calculate_dsr(&self, input: &DsrRequest) -> Result<HttpRequest, ApiError> {
        self.build_json_post(DSR_PATH, input)
    }

    pub fn parse_calculate_dsr(&self, response: HttpResponse) -> Result<DsrResponse, ApiError> {
        parse_json(response)
    }

    /// Liveness probe against the server's test endpoint.
    pub fn build_ping(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{PING_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_ping(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_json(response)
    }

    fn build_json_post<T: Serialize>(&self, suffix: &str, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{suffix}", self.base_url),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Reject non-2xx statuses before the body is looked at.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DsrStatus, ExpenseItem, SuggestionKind};

    fn client() -> LoanClient {
        LoanClient::new("http://localhost:8000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn sample_request() -> CalculateRequest {
        CalculateRequest {
            total_amount: 300000.0,
            downpayment: 60000.0,
            interest: 4.2,
            years: 30,
            monthly_budget: None,
        }
    }

    #[test]
    fn build_calculate_loan_produces_correct_request() {
        let req = client().build_calculate_loan(&sample_request()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/calculate");
        assert_eq!(
            req.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "total_amount": 300000.0,
                "downpayment": 60000.0,
                "interest": 4.2,
                "years": 30
            })
        );
    }

    #[test]
    fn build_calculate_dsr_produces_correct_request() {
        let input = DsrRequest {
            monthly_instalment: 1506.67,
            gross_income: 8000.0,
            net_income: Some(6500.0),
            expenses: vec![ExpenseItem {
                category: "Transportation".to_string(),
                name: "Car loan".to_string(),
                amount: 650.0,
            }],
        };
        let req = client().build_calculate_dsr(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/dsr");
        let body: DsrRequest = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, input);
    }

    #[test]
    fn default_config_produces_relative_paths() {
        let client = LoanClient::from_config(&ClientConfig::default());
        let req = client.build_calculate_loan(&sample_request()).unwrap();
        assert_eq!(req.path, "/api/calculate");
        assert_eq!(client.build_ping().path, "/api/test");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = LoanClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        let req = client.build_calculate_dsr(&DsrRequest {
            monthly_instalment: 0.0,
            gross_income: 1.0,
            net_income: None,
            expenses: Vec::new(),
        });
        assert_eq!(req.unwrap().path, "http://localhost:8000/dsr");
    }

    #[test]
    fn non_finite_numbers_serialize_as_null() {
        let mut input = sample_request();
        input.interest = f64::NAN;
        let req = client().build_calculate_loan(&input).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert!(body["interest"].is_null());
    }

    #[test]
    fn parse_calculate_loan_success() {
        let body = r#"{
            "downpayment": 60000.0,
            "downpayment_percentage": 20.0,
            "interest_rate": "4.2 %",
            "loan_amount": 240000.0,
            "loan_period": "30 years",
            "monthly_instalment": 1506.67,
            "budget_comparison": {
                "budget": 1200.0,
                "monthly_payment": 1506.67,
                "difference": -306.67,
                "status": "Over Budget",
                "suggestions": [
                    {"type": "reduce_price", "message": "Consider a property priced at RM 238,938.05 to meet your budget", "suggested_price": 238938.05, "new_monthly_payment": 1200.0}
                ]
            }
        }"#;
        let parsed = client().parse_calculate_loan(response(200, body)).unwrap();
        assert_eq!(parsed.monthly_instalment, 1506.67);
        let cmp = parsed.budget_comparison.unwrap();
        assert_eq!(cmp.suggestions.len(), 1);
        assert_eq!(cmp.suggestions[0].kind, SuggestionKind::ReducePrice);
        assert_eq!(cmp.suggestions[0].suggested_price, Some(238938.05));
    }

    #[test]
    fn parse_calculate_loan_accepts_explicit_nulls() {
        let body = r#"{
            "downpayment": 60000.0,
            "downpayment_percentage": 20.0,
            "interest_rate": "4.2 %",
            "loan_amount": 240000.0,
            "loan_period": "30 years",
            "monthly_instalment": 1506.67,
            "budget_comparison": null
        }"#;
        let parsed = client().parse_calculate_loan(response(200, body)).unwrap();
        assert!(parsed.budget_comparison.is_none());

        let body = r#"{
            "downpayment": 60000.0,
            "downpayment_percentage": 20.0,
            "interest_rate": "4.2 %",
            "loan_amount": 240000.0,
            "loan_period": "30 years",
            "monthly_instalment": 1506.67,
            "budget_comparison": {
                "budget": 1450.0,
                "monthly_payment": 1506.67,
                "difference": -56.67,
                "status": "Over Budget",
                "suggestions": [{
                    "type": "extend_term",
                    "message": "Extend loan term to 33 years to meet your budget",
                    "new_term": 33,
                    "new_monthly_payment": 1446.06,
                    "additional_downpayment": null,
                    "new_downpayment": null,
                    "suggested_price": null
                }]
            }
        }"#;
        let parsed = client().parse_calculate_loan(response(200, body)).unwrap();
        let suggestion = &parsed.budget_comparison.unwrap().suggestions[0];
        assert_eq!(suggestion.new_term, Some(33));
        assert!(suggestion.additional_downpayment.is_none());
        assert!(suggestion.suggested_price.is_none());

        // Nulls read as absent and are then omitted when written back.
        let value = serde_json::to_value(suggestion).unwrap();
        assert!(value.get("new_downpayment").is_none());
    }

    #[test]
    fn dsr_request_reads_null_net_income_as_absent() {
        let body = r#"{"monthly_instalment":900.0,"gross_income":6000.0,"net_income":null,"expenses":[]}"#;
        let request: DsrRequest = serde_json::from_str(body).unwrap();
        assert!(request.net_income.is_none());
    }

    #[test]
    fn parse_calculate_dsr_success() {
        let body = r#"{
            "total_monthly_debt": 2156.67,
            "dsr_percentage": 26.96,
            "status": "Healthy",
            "recommendation": "Your debt service ratio is healthy.",
            "expense_breakdown": {"Transportation": 650.0, "Loan Instalment": 1506.67}
        }"#;
        let parsed = client().parse_calculate_dsr(response(200, body)).unwrap();
        assert_eq!(parsed.status, DsrStatus::Healthy);
        assert_eq!(parsed.expense_breakdown["Loan Instalment"], 1506.67);
    }

    #[test]
    fn any_2xx_is_accepted() {
        let parsed = client().parse_ping(response(203, r#""ok""#)).unwrap();
        assert_eq!(parsed, "ok");
    }

    #[test]
    fn client_and_server_errors_collapse_into_status() {
        for status in [400u16, 404, 422, 500, 503] {
            let err = client()
                .parse_calculate_loan(response(status, r#"{"detail":"bad"}"#))
                .unwrap_err();
            assert!(matches!(err, ApiError::HttpStatus { status: s } if s == status));
            assert!(err.to_string().contains(&status.to_string()));
        }
    }

    #[test]
    fn error_body_is_not_parsed() {
        // A body that would decode as a valid DSR response must still fail.
        let body = r#"{"total_monthly_debt":1.0,"dsr_percentage":1.0,"status":"Healthy","recommendation":"","expense_breakdown":{}}"#;
        let err = client().parse_calculate_dsr(response(500, body)).unwrap_err();
        assert!(matches!(err, ApiError::HttpStatus { status: 500 }));
    }

    #[test]
    fn redirect_status_is_an_error() {
        let err = client().parse_ping(response(304, "")).unwrap_err();
        assert!(matches!(err, ApiError::HttpStatus { status: 304 }));
    }

    #[test]
    fn parse_calculate_loan_bad_json() {
        let err = client().parse_calculate_loan(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
