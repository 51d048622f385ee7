//! Raw form input → typed calculator input.
//!
//! Each form keeps its field values as the strings the user typed and applies
//! its own rules for missing or malformed values:
//!
//! | form          | empty numeric field    | malformed numeric field |
//! |---------------|------------------------|-------------------------|
//! | budget        | rejected               | rejected                |
//! | SIP           | rejected (target: none)| rejected                |
//! | savings       | treated as 0 (not years)| rejected               |
//! | custom %      | treated as 0           | treated as 0            |
//!
//! Numbers may carry surrounding whitespace, a leading currency symbol and
//! `,` thousands separators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::expense::{Expense, ExpenseCategory};
use crate::models::projection::{SavingsInput, SipInput};
use crate::services::projection_service::MAX_YEARS;

/// Currency symbols accepted (and ignored) in front of an amount.
const CURRENCY_PREFIXES: [&str; 5] = ["₹", "$", "€", "£", "¥"];

/// Date format accepted by the expense form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ── Budget ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetForm {
    pub income: String,
    pub savings: String,
}

impl BudgetForm {
    pub fn new(income: impl Into<String>, savings: impl Into<String>) -> Self {
        Self {
            income: income.into(),
            savings: savings.into(),
        }
    }

    /// Returns `(income, savings_target)`. The savings < income rule is
    /// enforced by the allocator.
    pub fn parse(&self) -> Result<(f64, f64), CoreError> {
        let income = parse_required("income", &self.income)?;
        let savings = parse_required("savings", &self.savings)?;
        Ok((income, savings))
    }
}

// ── SIP ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipForm {
    pub monthly_investment: String,
    pub annual_rate: String,
    pub years: String,
    pub target_corpus: String,
}

impl SipForm {
    pub fn parse(&self) -> Result<SipInput, CoreError> {
        let monthly_investment = parse_required("monthly investment", &self.monthly_investment)?;
        let annual_rate_percent = parse_required("rate of return", &self.annual_rate)?;
        let years = parse_years(&self.years)?;
        let target_corpus = parse_optional("target corpus", &self.target_corpus)?;

        Ok(SipInput {
            monthly_investment,
            annual_rate_percent,
            years,
            target_corpus,
        })
    }
}

// ── Savings ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsForm {
    pub current_savings: String,
    pub monthly_contribution: String,
    pub annual_rate: String,
    pub years: String,
}

impl SavingsForm {
    /// Blank amount and rate fields count as 0; `years` is always required.
    pub fn parse(&self) -> Result<SavingsInput, CoreError> {
        Ok(SavingsInput {
            current_savings: parse_or_zero("current savings", &self.current_savings)?,
            monthly_contribution: parse_or_zero("monthly savings", &self.monthly_contribution)?,
            annual_rate_percent: parse_or_zero("expected returns", &self.annual_rate)?,
            years: parse_years(&self.years)?,
        })
    }
}

// ── Expense ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    /// `YYYY-MM-DD`; blank or "today" means the current day
    pub date: String,
    pub description: String,
}

impl ExpenseForm {
    /// Parse using the local calendar day for a blank date.
    pub fn parse(&self) -> Result<Expense, CoreError> {
        self.parse_on(chrono::Local::now().date_naive())
    }

    /// Parse with an explicit "today" for a blank date.
    pub fn parse_on(&self, today: NaiveDate) -> Result<Expense, CoreError> {
        let amount = parse_required("amount", &self.amount)?;
        if amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Expense amount must be positive".into(),
            ));
        }

        if self.category.trim().is_empty() {
            return Err(CoreError::MissingField("category".into()));
        }
        let category: ExpenseCategory = self.category.parse()?;

        let date = parse_date(&self.date, today)?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(CoreError::MissingField("description".into()));
        }

        Ok(Expense::new(amount, category, date, description))
    }
}

// ── Field parsers ───────────────────────────────────────────────────

/// Parse a number that may be blank. Blank → `None`; anything that isn't a
/// finite number → `InvalidNumber`.
pub fn parse_optional(field: &str, raw: &str) -> Result<Option<f64>, CoreError> {
    let cleaned = clean_number(raw);
    if cleaned.is_empty() {
        return Ok(None);
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(CoreError::invalid_number(field, raw.trim())),
    }
}

/// Parse a number that must be present.
pub fn parse_required(field: &str, raw: &str) -> Result<f64, CoreError> {
    parse_optional(field, raw)?.ok_or_else(|| CoreError::MissingField(field.to_string()))
}

/// Parse a number, treating a blank field as 0.
pub fn parse_or_zero(field: &str, raw: &str) -> Result<f64, CoreError> {
    Ok(parse_optional(field, raw)?.unwrap_or(0.0))
}

/// Parse a custom allocation percentage. Blank or malformed input is 0.
#[must_use]
pub fn parse_percentage(raw: &str) -> f64 {
    parse_optional("percentage", raw.trim_end_matches('%'))
        .ok()
        .flatten()
        .unwrap_or(0.0)
}

/// Parse a duration in whole years. Must be present and between 1 and
/// [`MAX_YEARS`].
pub fn parse_years(raw: &str) -> Result<u32, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::MissingField("years".into()));
    }
    let years: i64 = trimmed
        .parse()
        .map_err(|_| CoreError::invalid_number("years", trimmed))?;
    if years <= 0 {
        return Err(CoreError::ValidationError(
            "Duration must be at least 1 year".into(),
        ));
    }
    match u32::try_from(years) {
        Ok(years) if years <= MAX_YEARS => Ok(years),
        _ => Err(CoreError::ValidationError(format!(
            "Duration must be at most {MAX_YEARS} years, got {years}"
        ))),
    }
}

/// Parse a `YYYY-MM-DD` date. Blank or "today" → `today`.
pub fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        CoreError::ValidationError(format!("Invalid date '{trimmed}': expected YYYY-MM-DD"))
    })
}

fn clean_number(raw: &str) -> String {
    let mut s = raw.trim();
    for prefix in CURRENCY_PREFIXES {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.trim_start();
            break;
        }
    }
    s.replace(',', "")
}
