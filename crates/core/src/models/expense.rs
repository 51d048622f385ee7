use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::errors::CoreError;

/// The closed set of spending categories an expense can be logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Housing, utilities, groceries, transport, insurance
    Necessities,
    Healthcare,
    #[serde(rename = "Debt Payments")]
    DebtPayments,
    Savings,
    #[serde(rename = "Discretionary Spending")]
    DiscretionarySpending,
}

impl ExpenseCategory {
    /// All categories in list order. Aggregation and charts follow this order.
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Necessities,
        ExpenseCategory::Healthcare,
        ExpenseCategory::DebtPayments,
        ExpenseCategory::Savings,
        ExpenseCategory::DiscretionarySpending,
    ];

    /// Display label, also used as the allocation plan key.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Necessities => "Necessities",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::DebtPayments => "Debt Payments",
            ExpenseCategory::Savings => "Savings",
            ExpenseCategory::DiscretionarySpending => "Discretionary Spending",
        }
    }

    /// Typical spending items that belong under this category.
    #[must_use]
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            ExpenseCategory::Necessities => &[
                "Housing (rent/mortgage)",
                "Utilities (electricity, water, gas)",
                "Groceries",
                "Transportation (car payments, gas, public transit)",
                "Insurance (health, life, home)",
            ],
            ExpenseCategory::Healthcare => &["Medical bills", "Prescriptions"],
            ExpenseCategory::DebtPayments => &["Credit card payments", "Personal loan payments"],
            ExpenseCategory::Savings => &["Emergency fund", "Retirement savings"],
            ExpenseCategory::DiscretionarySpending => &[
                "Entertainment (movies, dining out)",
                "Hobbies",
                "Clothing",
                "Gifts",
                "Personal care",
            ],
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = CoreError;

    /// Case-insensitive match on the label. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let labels: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.label()).collect();
                CoreError::ValidationError(format!(
                    "Unknown category '{wanted}': expected one of {}",
                    labels.join(", ")
                ))
            })
    }
}

/// A single logged expense.
///
/// The `id` is assigned at creation and never changes, so deleting from a
/// filtered view can't hit the wrong record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,

    /// Amount spent (always positive)
    pub amount: f64,

    pub category: ExpenseCategory,

    /// Day the money was spent (no time component)
    pub date: NaiveDate,

    pub description: String,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            date,
            description: description.into(),
        }
    }
}

/// Read-side filter over the expense log. Never mutates stored records.
///
/// Both date bounds are inclusive. An empty category set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub categories: BTreeSet<ExpenseCategory>,
}

impl ExpenseFilter {
    /// A filter that matches every expense.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_category(mut self, category: ExpenseCategory) -> Self {
        self.categories.insert(category);
        self
    }

    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        let after_start = self.start.map_or(true, |s| expense.date >= s);
        let before_end = self.end.map_or(true, |e| expense.date <= e);
        let in_category =
            self.categories.is_empty() || self.categories.contains(&expense.category);
        after_start && before_end && in_category
    }
}

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}
