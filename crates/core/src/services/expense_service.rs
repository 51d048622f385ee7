use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::expense::{CategoryTotal, Expense, ExpenseCategory, ExpenseFilter};

/// Manages the in-memory expense log: add, remove, filter, aggregate.
///
/// The log is a plain `Vec<Expense>` in insertion order. Filtering and
/// sorting produce views; they never reorder or mutate the stored records.
pub struct ExpenseService;

impl ExpenseService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and append an expense to the log. The description is stored
    /// trimmed.
    pub fn add_expense(
        &self,
        expenses: &mut Vec<Expense>,
        mut expense: Expense,
    ) -> Result<(), CoreError> {
        self.validate_expense(&expense)?;
        let trimmed = expense.description.trim();
        if trimmed.len() != expense.description.len() {
            expense.description = trimmed.to_string();
        }
        log::info!(
            "Logged expense {} ({} in {})",
            expense.id,
            expense.amount,
            expense.category
        );
        expenses.push(expense);
        Ok(())
    }

    /// Remove an expense by its id. Returns the removed record.
    pub fn remove_expense(&self, expenses: &mut Vec<Expense>, id: Uuid) -> Result<Expense, CoreError> {
        let idx = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::ExpenseNotFound(id.to_string()))?;
        let removed = expenses.remove(idx);
        log::info!("Removed expense {id}");
        Ok(removed)
    }

    /// Remove the expense at `index` in the stored (unfiltered) log.
    ///
    /// The index refers to insertion order, NOT to a position in a filtered
    /// or sorted view. Prefer [`remove_expense`](Self::remove_expense).
    pub fn remove_expense_at(
        &self,
        expenses: &mut Vec<Expense>,
        index: usize,
    ) -> Result<Expense, CoreError> {
        if index >= expenses.len() {
            return Err(CoreError::ExpenseNotFound(format!(
                "no expense at position {index} (log has {} entries)",
                expenses.len()
            )));
        }
        let removed = expenses.remove(index);
        log::info!("Removed expense {} at position {index}", removed.id);
        Ok(removed)
    }

    /// Apply `filter`, then sort ascending by date. Equal dates keep their
    /// log order (stable sort), so the result is idempotent under the same
    /// filter.
    pub fn filter_and_sort<'a, I>(&self, records: I, filter: &ExpenseFilter) -> Vec<&'a Expense>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut view: Vec<&Expense> = records.into_iter().filter(|e| filter.matches(e)).collect();
        view.sort_by_key(|e| e.date);
        view
    }

    /// Sum spending per category, in [`ExpenseCategory::ALL`] order.
    /// Categories with no expenses are reported with a total of 0.
    pub fn aggregate_by_category<'a, I>(&self, records: I) -> Vec<CategoryTotal>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut totals = [0.0_f64; ExpenseCategory::ALL.len()];
        for expense in records {
            if let Some(slot) = ExpenseCategory::ALL
                .iter()
                .position(|c| *c == expense.category)
            {
                totals[slot] += expense.amount;
            }
        }

        ExpenseCategory::ALL
            .iter()
            .zip(totals)
            .map(|(category, total)| CategoryTotal {
                category: *category,
                total,
            })
            .collect()
    }

    /// Total amount across `records`.
    pub fn total<'a, I>(&self, records: I) -> f64
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        records.into_iter().map(|e| e.amount).sum()
    }

    /// Rules:
    /// - Amount must be a positive, finite number
    /// - Description must not be blank
    fn validate_expense(&self, expense: &Expense) -> Result<(), CoreError> {
        if !expense.amount.is_finite() || expense.amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Expense amount must be positive".into(),
            ));
        }
        if expense.description.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Expense description must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new()
    }
}
