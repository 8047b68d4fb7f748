//! Request and response bodies for the calculation endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub total_amount: f64,
    pub downpayment: f64,
    pub interest: f64,
    pub years: u32,
    #[serde(default)]
    pub monthly_budget: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
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

impl Suggestion {
    fn new(kind: &str, message: String) -> Self {
        Self {
            kind: kind.to_string(),
            message,
            new_term: None,
            new_monthly_payment: None,
            additional_downpayment: None,
            new_downpayment: None,
            suggested_price: None,
        }
    }

    pub fn extend_term(message: String, new_term: u32, new_monthly_payment: f64) -> Self {
        Self {
            new_term: Some(new_term),
            new_monthly_payment: Some(new_monthly_payment),
            ..Self::new("extend_term", message)
        }
    }

    pub fn increase_downpayment(
        message: String,
        additional_downpayment: f64,
        new_downpayment: f64,
        new_monthly_payment: f64,
    ) -> Self {
        Self {
            additional_downpayment: Some(additional_downpayment),
            new_downpayment: Some(new_downpayment),
            new_monthly_payment: Some(new_monthly_payment),
            ..Self::new("increase_downpayment", message)
        }
    }

    pub fn reduce_price(message: String, suggested_price: f64, new_monthly_payment: f64) -> Self {
        Self {
            suggested_price: Some(suggested_price),
            new_monthly_payment: Some(new_monthly_payment),
            ..Self::new("reduce_price", message)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetComparison {
    pub budget: f64,
    pub monthly_payment: f64,
    pub difference: f64,
    pub status: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub downpayment: f64,
    pub downpayment_percentage: f64,
    pub interest_rate: String,
    pub loan_amount: f64,
    pub loan_period: String,
    pub monthly_instalment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_comparison: Option<BudgetComparison>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub category: String,
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsrRequest {
    pub monthly_instalment: f64,
    pub gross_income: f64,
    #[serde(default)]
    pub net_income: Option<f64>,
    pub expenses: Vec<ExpenseItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsrResponse {
    pub total_monthly_debt: f64,
    pub dsr_percentage: f64,
    pub status: String,
    pub recommendation: String,
    pub expense_breakdown: BTreeMap<String, f64>,
}
