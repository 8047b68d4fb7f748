//! Loan and debt service ratio arithmetic.
//!
//! Instalments use a flat-rate model: interest is charged on the full
//! principal for the whole term, then principal plus interest is spread
//! evenly over the months.

use std::collections::BTreeMap;

use crate::error::AppError;
use crate::models::{
    BudgetComparison, CalculateRequest, CalculateResponse, DsrRequest, DsrResponse, Suggestion,
};

/// Longest term the extend-term suggestion will propose.
pub const MAX_TERM_YEARS: u32 = 35;

/// Breakdown key for the loan instalment itself.
pub const LOAN_INSTALMENT: &str = "Loan Instalment";

pub const WITHIN_BUDGET: &str = "Within Budget";
pub const OVER_BUDGET: &str = "Over Budget";

/// Two-decimal rounding of the exact binary value, ties to even.
///
/// Goes through the same `{:.2}` formatting `format_money` uses, so the
/// numeric fields and the money in suggestion messages always agree.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Monthly payment for `loan` at annual `rate` (a fraction, not percent).
pub fn monthly_instalment(loan: f64, rate: f64, years: u32) -> f64 {
    let years = f64::from(years);
    (loan * rate * years + loan) / (years * 12.0)
}

/// Money with thousands separators and two decimals, e.g. `48,849.56`.
pub fn format_money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Rate label as shown to users: `4.2 %`, `4.0 %`, `1e-05 %`.
fn rate_label(interest: f64) -> String {
    format!("{} %", float_repr(interest))
}

/// Shortest round-trip text for `value`: positional for exponents in
/// `-4..16` (always with a fractional part), scientific with a signed
/// two-digit exponent outside it.
fn float_repr(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{value:?}");
    }

    let sci = format!("{value:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

pub fn calculate(input: &CalculateRequest) -> Result<CalculateResponse, AppError> {
    if input.total_amount == 0.0 {
        return Err(AppError::InvalidInput("total_amount must not be zero".to_string()));
    }
    if input.years == 0 {
        return Err(AppError::InvalidInput("years must be at least 1".to_string()));
    }

    let downpayment_percentage = input.downpayment / input.total_amount * 100.0;
    let rate = input.interest / 100.0;
    let loan_amount = input.total_amount - input.downpayment;
    let monthly = monthly_instalment(loan_amount, rate, input.years);

    let budget_comparison = input
        .monthly_budget
        .filter(|budget| *budget > 0.0)
        .map(|budget| compare_budget(input, budget, monthly));

    Ok(CalculateResponse {
        downpayment: round2(input.downpayment),
        downpayment_percentage: round2(downpayment_percentage),
        interest_rate: rate_label(input.interest),
        loan_amount: round2(loan_amount),
        loan_period: format!("{} years", input.years),
        monthly_instalment: round2(monthly),
        budget_comparison,
    })
}

fn compare_budget(input: &CalculateRequest, budget: f64, monthly: f64) -> BudgetComparison {
    let difference = budget - monthly;
    let (status, suggestions) = if difference >= 0.0 {
        (WITHIN_BUDGET, Vec::new())
    } else {
        (OVER_BUDGET, budget_suggestions(input, budget))
    };

    BudgetComparison {
        budget,
        monthly_payment: round2(monthly),
        difference: round2(difference),
        status: status.to_string(),
        suggestions,
    }
}

/// Ways to bring the instalment down to `budget`, in a fixed order:
/// longer term, larger downpayment, cheaper property.
pub fn budget_suggestions(input: &CalculateRequest, budget: f64) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let loan_amount = input.total_amount - input.downpayment;
    let rate = input.interest / 100.0;
    let years = input.years;

    let extended = (years.saturating_add(1)..=MAX_TERM_YEARS)
        .map(|term| (term, monthly_instalment(loan_amount, rate, term)))
        .find(|(_, monthly)| *monthly <= budget);
    if let Some((term, monthly)) = extended {
        suggestions.push(Suggestion::extend_term(
            format!("Extend loan term to {term} years to meet your budget"),
            term,
            round2(monthly),
        ));
    }

    // Invert the instalment formula for the principal the budget can carry.
    let required_loan = budget * f64::from(years) * 12.0 / (rate * f64::from(years) + 1.0);
    let additional = loan_amount - required_loan;
    if additional > 0.0 && input.downpayment + additional < input.total_amount {
        let monthly = monthly_instalment(required_loan, rate, years);
        suggestions.push(Suggestion::increase_downpayment(
            format!(
                "Increase downpayment by RM {} to meet your budget",
                format_money(additional)
            ),
            round2(additional),
            round2(input.downpayment + additional),
            round2(monthly),
        ));
    }

    // Same downpayment share on a cheaper property.
    let share = input.downpayment / input.total_amount;
    let required_total = required_loan / (1.0 - share);
    if required_total > 0.0 && required_total < input.total_amount {
        let new_loan = required_total - required_total * share;
        let monthly = monthly_instalment(new_loan, rate, years);
        suggestions.push(Suggestion::reduce_price(
            format!(
                "Consider a property priced at RM {} to meet your budget",
                format_money(required_total)
            ),
            round2(required_total),
            round2(monthly),
        ));
    }

    suggestions
}

/// Risk label and advice for a DSR percentage.
pub fn classify_dsr(dsr_percentage: f64) -> (&'static str, &'static str) {
    if dsr_percentage <= 30.0 {
        (
            "Healthy",
            "Your debt service ratio is healthy. You have good capacity for additional borrowing if needed.",
        )
    } else if dsr_percentage <= 50.0 {
        (
            "Medium",
            "Your DSR is moderate. Consider maintaining current debt levels and building an emergency fund.",
        )
    } else if dsr_percentage <= 70.0 {
        (
            "Caution",
            "Your DSR is high. Consider reducing expenses, increasing downpayment, or extending loan terms to lower monthly commitments.",
        )
    } else {
        (
            "High Risk",
            "Your DSR is very high. You may face difficulties getting loan approval. Consider a lower-priced property, higher downpayment, or reducing existing debts.",
        )
    }
}

pub fn dsr(input: &DsrRequest) -> Result<DsrResponse, AppError> {
    if input.gross_income == 0.0 {
        return Err(AppError::InvalidInput("gross_income must not be zero".to_string()));
    }

    let total_expenses: f64 = input.expenses.iter().map(|e| e.amount).sum();
    let total_monthly_debt = input.monthly_instalment + total_expenses;
    let dsr_percentage = total_monthly_debt / input.gross_income * 100.0;
    let (status, recommendation) = classify_dsr(dsr_percentage);

    let mut expense_breakdown = BTreeMap::new();
    for expense in &input.expenses {
        *expense_breakdown.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    expense_breakdown.insert(LOAN_INSTALMENT.to_string(), input.monthly_instalment);

    Ok(DsrResponse {
        total_monthly_debt: round2(total_monthly_debt),
        dsr_percentage: round2(dsr_percentage),
        status: status.to_string(),
        recommendation: recommendation.to_string(),
        expense_breakdown,
    })
}
