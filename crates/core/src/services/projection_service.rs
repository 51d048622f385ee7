use crate::errors::CoreError;
use crate::models::projection::{
    AssetBreakdown, SavingsInput, SavingsProjection, SipInput, SipProjection,
};

/// Longest projection horizon, in years.
pub const MAX_YEARS: u32 = 100;

/// Closed-form compound-growth projections: SIP corpus and long-term savings.
///
/// All contributions are treated as an annuity due (paid at the start of each
/// month) compounding monthly at `annual_rate / 12`. Results are unrounded;
/// rounding happens at presentation.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Project the corpus of a monthly SIP, plus the extra monthly amount
    /// needed to reach `target_corpus` when the plan falls short.
    pub fn project_sip(&self, input: &SipInput) -> Result<SipProjection, CoreError> {
        if !input.monthly_investment.is_finite() || input.monthly_investment <= 0.0 {
            return Err(CoreError::ValidationError(
                "Monthly investment must be a positive number".into(),
            ));
        }
        Self::validate_horizon(input.annual_rate_percent, input.years)?;
        if let Some(target) = input.target_corpus {
            if !target.is_finite() || target < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Target corpus must be a non-negative number, got {target}"
                )));
            }
        }

        let r = monthly_rate(input.annual_rate_percent);
        let n = months(input.years);
        let factor = annuity_due_factor(r, n);
        let final_corpus = input.monthly_investment * factor;

        let yearly_series = (1..=input.years)
            .map(|year| input.monthly_investment * annuity_due_factor(r, months(year)))
            .collect();

        // Linear in the monthly amount, so the shortfall divides straight through.
        let extra_monthly_needed = input
            .target_corpus
            .filter(|target| *target > final_corpus)
            .map(|target| (target - final_corpus) / factor);

        let total_invested = input.monthly_investment * f64::from(n);
        Self::ensure_finite(final_corpus)?;

        log::debug!(
            "SIP projection: {} x {n} months at {}% -> {final_corpus}",
            input.monthly_investment,
            input.annual_rate_percent
        );

        Ok(SipProjection {
            final_corpus,
            yearly_series,
            extra_monthly_needed,
            total_invested,
            estimated_returns: final_corpus - total_invested,
        })
    }

    /// Project a lump sum plus monthly contributions.
    pub fn project_savings(&self, input: &SavingsInput) -> Result<SavingsProjection, CoreError> {
        if !input.current_savings.is_finite() || input.current_savings < 0.0 {
            return Err(CoreError::ValidationError(
                "Current savings must be a non-negative number".into(),
            ));
        }
        if !input.monthly_contribution.is_finite() || input.monthly_contribution < 0.0 {
            return Err(CoreError::ValidationError(
                "Monthly contribution must be a non-negative number".into(),
            ));
        }
        Self::validate_horizon(input.annual_rate_percent, input.years)?;

        let r = monthly_rate(input.annual_rate_percent);
        let value_after = |n: u32| {
            input.current_savings * growth(r, n)
                + input.monthly_contribution * annuity_due_factor(r, n)
        };

        let n = months(input.years);
        let final_value = value_after(n);
        Self::ensure_finite(final_value)?;
        let yearly_series = (1..=input.years).map(|year| value_after(months(year))).collect();
        let total_contributed = input.current_savings + input.monthly_contribution * f64::from(n);

        log::debug!(
            "Savings projection: {} + {} x {n} months at {}% -> {final_value}",
            input.current_savings,
            input.monthly_contribution,
            input.annual_rate_percent
        );

        Ok(SavingsProjection {
            final_value,
            yearly_series,
            total_contributed,
            breakdown: AssetBreakdown::from_total(final_value),
        })
    }

    /// Rules shared by both projections:
    /// - Horizon must be between 1 and [`MAX_YEARS`] years
    /// - Annual rate must be finite and above -100 %
    fn validate_horizon(annual_rate_percent: f64, years: u32) -> Result<(), CoreError> {
        if years == 0 {
            return Err(CoreError::ValidationError(
                "Duration must be at least 1 year".into(),
            ));
        }
        if years > MAX_YEARS {
            return Err(CoreError::ValidationError(format!(
                "Duration must be at most {MAX_YEARS} years, got {years}"
            )));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent <= -100.0 {
            return Err(CoreError::ValidationError(format!(
                "Annual rate must be a number greater than -100%, got {annual_rate_percent}"
            )));
        }
        Ok(())
    }

    fn ensure_finite(value: f64) -> Result<(), CoreError> {
        if value.is_finite() {
            Ok(())
        } else {
            log::warn!("Rejected projection: result is not a finite number");
            Err(CoreError::ValidationError(
                "Projected value is too large to compute; lower the rate or duration".into(),
            ))
        }
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}

/// `annual_rate_percent / 100 / 12`
#[must_use]
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

fn months(years: u32) -> u32 {
    years.saturating_mul(12)
}

/// `(1 + r)^n`
fn growth(r: f64, n: u32) -> f64 {
    (1.0 + r).powf(f64::from(n))
}

/// Future value of 1 paid at the start of each of `n` periods:
/// `((1 + r)^n - 1) / r * (1 + r)`. At `r == 0` this is simply `n`.
#[must_use]
pub fn annuity_due_factor(r: f64, n: u32) -> f64 {
    if r == 0.0 {
        return f64::from(n);
    }
    (growth(r, n) - 1.0) / r * (1.0 + r)
}
