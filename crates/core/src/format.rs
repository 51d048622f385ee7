//! Presentation helpers. Calculations stay unrounded; these run last.

/// Round to `digits` decimal places.
#[must_use]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}

/// Round to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Format an amount with its currency symbol and 2 decimals, e.g. `₹1161695.38`.
/// Negative amounts put the sign before the symbol.
#[must_use]
pub fn format_money(amount: f64, symbol: &str) -> String {
    let rounded = round2(amount);
    if rounded < 0.0 {
        format!("-{symbol}{:.2}", -rounded)
    } else {
        // abs() turns -0.0 into 0.0 so it doesn't print as "-0.00"
        format!("{symbol}{:.2}", rounded.abs())
    }
}

/// Format a percentage with precision that suits its size.
#[must_use]
pub fn format_percentage(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{pct:.0}%")
    } else {
        format!("{pct:.2}%")
    }
}
