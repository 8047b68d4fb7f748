//! Domain DTOs for the loan calculation API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently;
//! integration tests catch drift between the two crates. Optional fields are
//! omitted from serialized JSON rather than written as `null`, and unknown
//! response fields are ignored so older clients keep working against a
//! server that grows its payloads.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One affordability query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculateRequest {
    pub total_amount: f64,
    pub downpayment: f64,
    /// Annual interest rate in percent (`4.2` means 4.2 %).
    pub interest: f64,
    pub years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<f64>,
}

/// Loan figures computed by the server for a `CalculateRequest`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculateResponse {
    pub downpayment: f64,
    pub downpayment_percentage: f64,
    /// Display string, e.g. `"4.2 %"`.
    pub interest_rate: String,
    pub loan_amount: f64,
    /// Display string, e.g. `"30 years"`.
    pub loan_period: String,
    pub monthly_instalment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_comparison: Option<BudgetComparison>,
}

/// Present when the request carried a positive `monthly_budget`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetComparison {
    pub budget: f64,
    pub monthly_payment: f64,
    pub difference: f64,
    /// Free-form label such as `"Within Budget"` or `"Over Budget"`.
    pub status: String,
    pub suggestions: Vec<Suggestion>,
}

impl BudgetComparison {
    pub fn is_over_budget(&self) -> bool {
        self.difference < 0.0
    }
}

/// Discriminator of a `Suggestion`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    ExtendTerm,
    IncreaseDownpayment,
    ReducePrice,
    /// Any discriminator this client does not know, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

/// A piece of advice for bringing the instalment within budget.
///
/// The fields are only loosely partitioned by `kind`: `extend_term` fills
/// `new_term`, `increase_downpayment` fills `additional_downpayment` and
/// `new_downpayment`, `reduce_price` fills `suggested_price`, and all of
/// them usually carry `new_monthly_payment`. Fields a variant does not use
/// are absent, never zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_term: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_monthly_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_downpayment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_downpayment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_price: Option<f64>,
}

/// A recurring monthly commitment other than the loan itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseItem {
    /// Expected to be one of `catalog::EXPENSE_CATEGORIES`; not enforced.
    pub category: String,
    pub name: String,
    pub amount: f64,
}

/// Debt service ratio query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DsrRequest {
    pub monthly_instalment: f64,
    pub gross_income: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_income: Option<f64>,
    pub expenses: Vec<ExpenseItem>,
}

/// Risk label attached to a DSR result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DsrStatus {
    Healthy,
    Medium,
    Caution,
    #[serde(rename = "High Risk")]
    HighRisk,
    /// A label outside the known set, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

impl DsrStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DsrStatus::Healthy => "Healthy",
            DsrStatus::Medium => "Medium",
            DsrStatus::Caution => "Caution",
            DsrStatus::HighRisk => "High Risk",
            DsrStatus::Other(label) => label,
        }
    }
}

impl fmt::Display for DsrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a DSR calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DsrResponse {
    pub total_monthly_debt: f64,
    pub dsr_percentage: f64,
    pub status: DsrStatus,
    pub recommendation: String,
    /// Summed amount per category, including `Loan Instalment`.
    pub expense_breakdown: BTreeMap<String, f64>,
}
