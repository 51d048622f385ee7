use crate::format::round2;
use crate::models::allocation::AllocationResult;
use crate::models::chart::ChartDataPoint;
use crate::models::expense::CategoryTotal;
use crate::models::projection::AssetBreakdown;

/// Y-axis headroom applied above the largest value.
const SUGGESTED_MAX_HEADROOM: f64 = 1.2;

/// Turns calculation results into chart-ready `{label, value}` series.
///
/// The core computes and rounds all the numbers; the renderer only draws.
/// Every series keeps the order of its source (years ascending, plan order,
/// category list order).
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// "Year 1", "Year 2", ... for a yearly projection series.
    pub fn yearly_series(&self, series: &[f64]) -> Vec<ChartDataPoint> {
        series
            .iter()
            .enumerate()
            .map(|(i, value)| ChartDataPoint::new(format!("Year {}", i + 1), round2(*value)))
            .collect()
    }

    /// One slice per allocation share, in plan order.
    pub fn allocation(&self, result: &AllocationResult) -> Vec<ChartDataPoint> {
        result
            .shares
            .iter()
            .map(|s| ChartDataPoint::new(s.category.clone(), round2(s.amount_allocated)))
            .collect()
    }

    /// One point per expense category, in category list order.
    pub fn category_totals(&self, totals: &[CategoryTotal]) -> Vec<ChartDataPoint> {
        totals
            .iter()
            .map(|t| ChartDataPoint::new(t.category.label(), round2(t.total)))
            .collect()
    }

    pub fn asset_breakdown(&self, breakdown: &AssetBreakdown) -> Vec<ChartDataPoint> {
        vec![
            ChartDataPoint::new("Stocks", round2(breakdown.stocks)),
            ChartDataPoint::new("Bonds", round2(breakdown.bonds)),
            ChartDataPoint::new("Real Estate", round2(breakdown.real_estate)),
            ChartDataPoint::new("Cash", round2(breakdown.cash)),
        ]
    }

    /// Upper bound for the y-axis: largest value plus 20 %.
    /// `None` for an empty series.
    pub fn suggested_max(&self, points: &[ChartDataPoint]) -> Option<f64> {
        points
            .iter()
            .map(|p| p.value)
            .reduce(f64::max)
            .map(|max| max * SUGGESTED_MAX_HEADROOM)
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
