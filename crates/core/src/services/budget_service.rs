use crate::errors::CoreError;
use crate::models::allocation::{
    AllocationPlan, AllocationResult, AllocationShare, BudgetReport, ALLOCATION_COLORS,
};

/// Splits disposable income (income minus the savings target) across an
/// allocation plan.
///
/// Pure business logic: no I/O, no state.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Allocate `income - savings_target` across `plan`, in plan order.
    ///
    /// Rules:
    /// - Income and savings target must be finite and non-negative
    /// - Savings target must be strictly less than income
    /// - Percentages are applied as-is; a plan that doesn't sum to 100
    ///   allocates proportionally more or less than the disposable amount
    pub fn allocate(
        &self,
        income: f64,
        savings_target: f64,
        plan: &AllocationPlan,
    ) -> Result<AllocationResult, CoreError> {
        Self::validate_amounts(income, savings_target)?;
        Self::validate_plan(plan)?;

        let disposable = income - savings_target;
        let shares = plan
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| AllocationShare {
                category: entry.category.clone(),
                amount_allocated: disposable * entry.percentage / 100.0,
                percentage: entry.percentage,
                color: ALLOCATION_COLORS[index % ALLOCATION_COLORS.len()].to_string(),
            })
            .collect();

        log::debug!(
            "Allocated {disposable} across {} categories ({}% of disposable)",
            plan.len(),
            plan.total_percentage()
        );

        Ok(AllocationResult { disposable, shares })
    }

    /// Compute the suggested split and the user's custom split side by side.
    pub fn budget_report(
        &self,
        income: f64,
        savings_target: f64,
        custom: &AllocationPlan,
    ) -> Result<BudgetReport, CoreError> {
        let suggested = self.allocate(income, savings_target, &AllocationPlan::suggested())?;
        let custom = self.allocate(income, savings_target, custom)?;
        Ok(BudgetReport { suggested, custom })
    }

    fn validate_amounts(income: f64, savings_target: f64) -> Result<(), CoreError> {
        if !income.is_finite() || income < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Income must be a non-negative number, got {income}"
            )));
        }
        if !savings_target.is_finite() || savings_target < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Savings target must be a non-negative number, got {savings_target}"
            )));
        }
        if savings_target >= income {
            log::warn!("Rejected budget: savings target {savings_target} >= income {income}");
            return Err(CoreError::ValidationError(format!(
                "Savings target ({savings_target}) must be less than income ({income})"
            )));
        }
        Ok(())
    }

    fn validate_plan(plan: &AllocationPlan) -> Result<(), CoreError> {
        match plan
            .entries()
            .iter()
            .find(|e| !e.percentage.is_finite() || e.percentage < 0.0)
        {
            Some(entry) => Err(CoreError::ValidationError(format!(
                "Percentage for '{}' must be a non-negative number, got {}",
                entry.category, entry.percentage
            ))),
            None => Ok(()),
        }
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
