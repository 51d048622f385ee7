use serde::{Deserialize, Serialize};

/// Chart palette; shares are colored by position, wrapping after five.
pub const ALLOCATION_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A28DFF"];

/// One row of an allocation plan: a category name and its percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub category: String,
    pub percentage: f64,
}

/// An ordered mapping of category name → percentage of disposable income.
///
/// **Order matters**: shares are produced (and colored) in insertion order.
/// Percentages are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationPlan {
    entries: Vec<AllocationEntry>,
}

impl AllocationPlan {
    /// An empty plan.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The fixed suggested split: 50 / 10 / 10 / 20 / 10.
    pub fn suggested() -> Self {
        Self::from_pairs([
            ("Necessities", 50.0),
            ("Healthcare", 10.0),
            ("Debt Payments", 10.0),
            ("Savings", 20.0),
            ("Discretionary Spending", 10.0),
        ])
    }

    /// Build a plan from `(category, percentage)` pairs, keeping their order.
    /// A repeated category overwrites the earlier percentage in place.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut plan = Self::new();
        for (category, percentage) in pairs {
            plan.set_percentage(category, percentage);
        }
        plan
    }

    /// Set the percentage for a category. Existing categories keep their
    /// position; new ones are appended.
    pub fn set_percentage(&mut self, category: impl Into<String>, percentage: f64) {
        let category = category.into();
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.percentage = percentage,
            None => self.entries.push(AllocationEntry {
                category,
                percentage,
            }),
        }
    }

    #[must_use]
    pub fn percentage(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.percentage)
    }

    /// Sum of all percentages (may differ from 100).
    #[must_use]
    pub fn total_percentage(&self) -> f64 {
        self.entries.iter().map(|e| e.percentage).sum()
    }

    #[must_use]
    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AllocationPlan {
    fn default() -> Self {
        Self::suggested()
    }
}

/// The amount allocated to a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationShare {
    pub category: String,

    /// `disposable * percentage / 100`
    pub amount_allocated: f64,

    pub percentage: f64,

    /// Chart color assigned by position in the plan
    pub color: String,
}

/// Result of splitting disposable income across a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// `income - savings_target`
    pub disposable: f64,

    /// One share per plan entry, in plan order
    pub shares: Vec<AllocationShare>,
}

impl AllocationResult {
    /// Sum of all allocated amounts. Equals `disposable` only when the plan
    /// percentages add up to exactly 100.
    #[must_use]
    pub fn total_allocated(&self) -> f64 {
        self.shares.iter().map(|s| s.amount_allocated).sum()
    }
}

/// Suggested and custom allocations computed from the same income/savings pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub suggested: AllocationResult,
    pub custom: AllocationResult,
}
