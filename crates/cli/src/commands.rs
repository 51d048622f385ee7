//! One-shot calculator commands. Stateless: no session, no expense log.

use anyhow::{bail, Result};

use finwise_core::forms::{self, BudgetForm, SavingsForm, SipForm};
use finwise_core::models::allocation::AllocationPlan;
use finwise_core::models::settings::Settings;
use finwise_core::services::budget_service::BudgetService;
use finwise_core::services::projection_service::ProjectionService;

use crate::output::{self, OutputFormat};

pub fn budget(
    settings: &Settings,
    format: OutputFormat,
    income: &str,
    savings: &str,
    overrides: &[String],
) -> Result<()> {
    let (income, savings) = BudgetForm::new(income, savings).parse()?;

    let custom = with_overrides(&settings.default_allocation, overrides)?;
    let report = BudgetService::new().budget_report(income, savings, &custom)?;
    output::print_budget_report(settings, format, &report)
}

pub fn sip(
    settings: &Settings,
    format: OutputFormat,
    monthly: String,
    rate: String,
    years: String,
    target: Option<String>,
) -> Result<()> {
    let form = SipForm {
        monthly_investment: monthly,
        annual_rate: rate,
        years,
        target_corpus: target.unwrap_or_default(),
    };
    let input = form.parse()?;
    let projection = ProjectionService::new().project_sip(&input)?;
    output::print_sip(settings, format, &projection)
}

pub fn savings(
    settings: &Settings,
    format: OutputFormat,
    current: String,
    monthly: String,
    rate: String,
    years: String,
) -> Result<()> {
    let form = SavingsForm {
        current_savings: current,
        monthly_contribution: monthly,
        annual_rate: rate,
        years,
    };
    let input = form.parse()?;
    let projection = ProjectionService::new().project_savings(&input)?;
    output::print_savings(settings, format, &projection)
}

/// Parse `"Category=pct"`. The percentage follows the custom-allocation
/// rule: blank or malformed counts as 0.
pub fn parse_override(raw: &str) -> Result<(String, f64)> {
    let Some((category, pct)) = raw.split_once('=') else {
        bail!("Expected CATEGORY=PERCENT, got '{raw}'");
    };
    let category = category.trim();
    if category.is_empty() {
        bail!("Missing category name in '{raw}'");
    }
    Ok((category.to_string(), forms::parse_percentage(pct)))
}

/// Apply `CATEGORY=PCT` overrides to a copy of `base`.
pub fn with_overrides(base: &AllocationPlan, overrides: &[String]) -> Result<AllocationPlan> {
    let mut plan = base.clone();
    for raw in overrides {
        let (category, pct) = parse_override(raw)?;
        plan.set_percentage(category, pct);
    }
    Ok(plan)
}
