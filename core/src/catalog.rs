//! Static display metadata shared with presentation code.
//!
//! Category identifiers and risk labels double as an implicit contract with
//! the server: `expense_breakdown` keys and DSR `status` values are expected
//! to be exactly these strings.

use std::collections::BTreeMap;

use crate::types::DsrStatus;

/// A selectable expense category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseCategory {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// Synthetic category the server adds to every breakdown for the loan itself.
pub const LOAN_INSTALMENT_CATEGORY: &str = "Loan Instalment";

/// Expense categories in the order selection controls list them.
pub static EXPENSE_CATEGORIES: [ExpenseCategory; 7] = [
    ExpenseCategory { value: "Housing", label: "Housing", color: "#3B82F6" },
    ExpenseCategory { value: "Transportation", label: "Transportation", color: "#10B981" },
    ExpenseCategory { value: "Utilities", label: "Utilities", color: "#F59E0B" },
    ExpenseCategory { value: "Insurance", label: "Insurance", color: "#8B5CF6" },
    ExpenseCategory { value: "Credit Cards", label: "Credit Cards", color: "#EF4444" },
    ExpenseCategory { value: "Personal Loans", label: "Personal Loans", color: "#EC4899" },
    ExpenseCategory { value: "Others", label: "Others", color: "#6B7280" },
];

/// Chart colors keyed by category, including `Loan Instalment`.
pub static CATEGORY_COLORS: [(&str, &str); 8] = [
    ("Housing", "#3B82F6"),
    ("Transportation", "#10B981"),
    ("Utilities", "#F59E0B"),
    ("Insurance", "#8B5CF6"),
    ("Credit Cards", "#EF4444"),
    ("Personal Loans", "#EC4899"),
    ("Others", "#6B7280"),
    (LOAN_INSTALMENT_CATEGORY, "#1D4ED8"),
];

/// Badge style tokens keyed by DSR risk label.
pub static DSR_STATUS_COLORS: [(&str, &str); 4] = [
    ("Healthy", "bg-green-100 text-green-800 border-green-200"),
    ("Medium", "bg-yellow-100 text-yellow-800 border-yellow-200"),
    ("Caution", "bg-orange-100 text-orange-800 border-orange-200"),
    ("High Risk", "bg-red-100 text-red-800 border-red-200"),
];

/// True when `name` is one of the selectable expense categories.
pub fn is_known_category(name: &str) -> bool {
    EXPENSE_CATEGORIES.iter().any(|c| c.value == name)
}

pub fn expense_category(name: &str) -> Option<&'static ExpenseCategory> {
    EXPENSE_CATEGORIES.iter().find(|c| c.value == name)
}

pub fn category_color(name: &str) -> Option<&'static str> {
    lookup(&CATEGORY_COLORS, name)
}

pub fn dsr_status_style(status: &str) -> Option<&'static str> {
    lookup(&DSR_STATUS_COLORS, status)
}

impl DsrStatus {
    /// Style token for this label; `None` for labels outside the known set.
    pub fn style(&self) -> Option<&'static str> {
        dsr_status_style(self.as_str())
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// One wedge of an expense chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSlice<'a> {
    pub category: &'a str,
    pub amount: f64,
    /// `None` when the category has no assigned color.
    pub color: Option<&'static str>,
}

/// Pair every breakdown entry with its chart color.
///
/// Known categories come first in `EXPENSE_CATEGORIES` order, then
/// `Loan Instalment`, then anything unrecognised in key order.
pub fn breakdown_slices(breakdown: &BTreeMap<String, f64>) -> Vec<BreakdownSlice<'_>> {
    let rank = |name: &str| {
        CATEGORY_COLORS
            .iter()
            .position(|(k, _)| *k == name)
            .unwrap_or(CATEGORY_COLORS.len())
    };

    let mut slices: Vec<BreakdownSlice<'_>> = breakdown
        .iter()
        .map(|(category, amount)| BreakdownSlice {
            category: category.as_str(),
            amount: *amount,
            color: category_color(category),
        })
        .collect();
    // Stable sort keeps key order among unknown categories.
    slices.sort_by_key(|s| rank(s.category));
    slices
}
