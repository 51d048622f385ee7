pub mod errors;
pub mod format;
pub mod forms;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use models::{
    allocation::{AllocationPlan, BudgetReport},
    expense::{CategoryTotal, Expense, ExpenseCategory, ExpenseFilter},
    projection::{SavingsInput, SavingsProjection, SipInput, SipProjection},
    session::Session,
    settings::Settings,
};
use services::{
    budget_service::BudgetService, expense_service::ExpenseService,
    projection_service::ProjectionService,
};
use uuid::Uuid;

use errors::CoreError;

/// Main entry point for the finwise core library.
/// Holds one user's session-scoped state and the services that operate on it.
///
/// Everything except login, logout and settings requires an authenticated
/// session. Nothing here is persisted: logging out drops the expense log and
/// the custom allocation.
#[must_use]
pub struct FinanceToolkit {
    session: Session,
    settings: Settings,
    custom_allocation: AllocationPlan,
    expenses: Vec<Expense>,
    budget_service: BudgetService,
    expense_service: ExpenseService,
    projection_service: ProjectionService,
}

impl std::fmt::Debug for FinanceToolkit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceToolkit")
            .field("user", &self.session.user())
            .field("settings", &self.settings)
            .field("custom_allocation", &self.custom_allocation.len())
            .field("expenses", &self.expenses.len())
            .finish()
    }
}

impl FinanceToolkit {
    /// Create a logged-out toolkit with the given settings.
    pub fn new(settings: Settings) -> Self {
        let custom_allocation = settings.default_allocation.clone();
        Self {
            session: Session::new(),
            settings,
            custom_allocation,
            expenses: Vec::new(),
            budget_service: BudgetService::new(),
            expense_service: ExpenseService::new(),
            projection_service: ProjectionService::new(),
        }
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Check credentials and open the session.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), CoreError> {
        self.session.login(email, password)
    }

    /// Close the session and drop all session-scoped data.
    pub fn logout(&mut self) {
        self.session.logout();
        self.expenses.clear();
        self.custom_allocation = self.settings.default_allocation.clone();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Budget ──────────────────────────────────────────────────────

    /// The user's editable allocation plan.
    pub fn custom_allocation(&self) -> Result<&AllocationPlan, CoreError> {
        self.session.require()?;
        Ok(&self.custom_allocation)
    }

    /// Change one category's percentage in the custom plan.
    pub fn set_custom_percentage(
        &mut self,
        category: &str,
        percentage: f64,
    ) -> Result<(), CoreError> {
        self.session.require()?;
        if !percentage.is_finite() || percentage < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Percentage for '{category}' must be a non-negative number, got {percentage}"
            )));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(CoreError::MissingField("category".into()));
        }
        self.custom_allocation.set_percentage(category, percentage);
        Ok(())
    }

    /// Restore the custom plan to the configured default.
    pub fn reset_custom_allocation(&mut self) -> Result<(), CoreError> {
        self.session.require()?;
        self.custom_allocation = self.settings.default_allocation.clone();
        Ok(())
    }

    /// Suggested and custom allocations for this income and savings target.
    pub fn generate_budget(
        &self,
        income: f64,
        savings_target: f64,
    ) -> Result<BudgetReport, CoreError> {
        self.session.require()?;
        self.budget_service
            .budget_report(income, savings_target, &self.custom_allocation)
    }

    // ── Expenses ────────────────────────────────────────────────────

    /// Log an expense. Returns its id.
    pub fn add_expense(
        &mut self,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        self.session.require()?;
        let expense = Expense::new(amount, category, date, description);
        let id = expense.id;
        self.expense_service.add_expense(&mut self.expenses, expense)?;
        Ok(id)
    }

    /// Log an already-built expense (e.g. from [`forms::ExpenseForm`]).
    pub fn add_expense_record(&mut self, expense: Expense) -> Result<Uuid, CoreError> {
        self.session.require()?;
        let id = expense.id;
        self.expense_service.add_expense(&mut self.expenses, expense)?;
        Ok(id)
    }

    /// Remove an expense by id.
    pub fn remove_expense(&mut self, id: Uuid) -> Result<Expense, CoreError> {
        self.session.require()?;
        self.expense_service.remove_expense(&mut self.expenses, id)
    }

    /// Remove the expense at `index` in insertion order (ignores any filter).
    pub fn remove_expense_at(&mut self, index: usize) -> Result<Expense, CoreError> {
        self.session.require()?;
        self.expense_service
            .remove_expense_at(&mut self.expenses, index)
    }

    /// Get a single expense by its id.
    pub fn get_expense(&self, id: Uuid) -> Result<Option<&Expense>, CoreError> {
        self.session.require()?;
        Ok(self.expenses.iter().find(|e| e.id == id))
    }

    /// All expenses in insertion order.
    pub fn expenses(&self) -> Result<&[Expense], CoreError> {
        self.session.require()?;
        Ok(&self.expenses)
    }

    /// Expenses matching `filter`, oldest first.
    pub fn filtered_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<&Expense>, CoreError> {
        self.session.require()?;
        Ok(self.expense_service.filter_and_sort(&self.expenses, filter))
    }

    /// Per-category totals of the expenses matching `filter`.
    pub fn spending_by_category(
        &self,
        filter: &ExpenseFilter,
    ) -> Result<Vec<CategoryTotal>, CoreError> {
        self.session.require()?;
        let view = self.expense_service.filter_and_sort(&self.expenses, filter);
        Ok(self.expense_service.aggregate_by_category(view))
    }

    /// Number of logged expenses, without materializing a view.
    pub fn expense_count(&self) -> Result<usize, CoreError> {
        self.session.require()?;
        Ok(self.expenses.len())
    }

    // ── Projections ─────────────────────────────────────────────────

    pub fn project_sip(&self, input: &SipInput) -> Result<SipProjection, CoreError> {
        self.session.require()?;
        self.projection_service.project_sip(input)
    }

    pub fn project_savings(&self, input: &SavingsInput) -> Result<SavingsProjection, CoreError> {
        self.session.require()?;
        self.projection_service.project_savings(input)
    }
}

impl Default for FinanceToolkit {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
