use serde::{Deserialize, Serialize};

/// Inputs for a systematic investment plan projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    /// Amount invested at the start of every month
    pub monthly_investment: f64,

    /// Expected annual return, in percent (12.0 = 12 %)
    pub annual_rate_percent: f64,

    /// Investment horizon in whole years
    pub years: u32,

    /// Corpus the investor wants to reach, if any
    #[serde(default)]
    pub target_corpus: Option<f64>,
}

impl SipInput {
    pub fn new(monthly_investment: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self {
            monthly_investment,
            annual_rate_percent,
            years,
            target_corpus: None,
        }
    }

    pub fn with_target(mut self, target_corpus: f64) -> Self {
        self.target_corpus = Some(target_corpus);
        self
    }
}

/// Result of a SIP projection. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipProjection {
    /// Corpus at the end of the horizon
    pub final_corpus: f64,

    /// Corpus at the end of each year; index 0 = end of year 1
    pub yearly_series: Vec<f64>,

    /// Additional monthly investment needed to reach the target corpus.
    /// `None` when there is no target or the target is already met.
    pub extra_monthly_needed: Option<f64>,

    /// Sum of all monthly investments
    pub total_invested: f64,

    /// `final_corpus - total_invested`
    pub estimated_returns: f64,
}

/// Inputs for a lump-sum plus monthly-contribution savings projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsInput {
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl SavingsInput {
    pub fn new(
        current_savings: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        years: u32,
    ) -> Self {
        Self {
            current_savings,
            monthly_contribution,
            annual_rate_percent,
            years,
        }
    }
}

/// Result of a savings projection. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjection {
    pub final_value: f64,

    /// Value at the end of each year; index 0 = end of year 1
    pub yearly_series: Vec<f64>,

    /// Current savings plus every monthly contribution
    pub total_contributed: f64,

    /// Display-only split of `final_value` across asset classes
    pub breakdown: AssetBreakdown,
}

/// Fixed 50 / 25 / 15 / 10 split of a projected value across asset classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetBreakdown {
    pub stocks: f64,
    pub bonds: f64,
    pub real_estate: f64,
    pub cash: f64,
}

impl AssetBreakdown {
    pub const STOCKS_PCT: f64 = 50.0;
    pub const BONDS_PCT: f64 = 25.0;
    pub const REAL_ESTATE_PCT: f64 = 15.0;
    pub const CASH_PCT: f64 = 10.0;

    pub fn from_total(total: f64) -> Self {
        Self {
            stocks: total * Self::STOCKS_PCT / 100.0,
            bonds: total * Self::BONDS_PCT / 100.0,
            real_estate: total * Self::REAL_ESTATE_PCT / 100.0,
            cash: total * Self::CASH_PCT / 100.0,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.stocks + self.bonds + self.real_estate + self.cash
    }
}
