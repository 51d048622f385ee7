//! Terminal rendering of calculation results, as text tables or JSON.

use std::fmt::Write;

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use finwise_core::format::{format_money, format_percentage, round2};
use finwise_core::models::allocation::{AllocationResult, BudgetReport};
use finwise_core::models::chart::ChartDataPoint;
use finwise_core::models::expense::{CategoryTotal, Expense, ExpenseCategory};
use finwise_core::models::projection::{SavingsProjection, SipProjection};
use finwise_core::models::settings::Settings;
use finwise_core::services::chart_service::ChartService;

const BAR_WIDTH: usize = 30;
const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ── Budget ──────────────────────────────────────────────────────────

pub fn print_budget_report(
    settings: &Settings,
    format: OutputFormat,
    report: &BudgetReport,
) -> Result<()> {
    let charts = ChartService::new();
    match format {
        OutputFormat::Json => print_json(&json!({
            "suggested": report.suggested,
            "custom": report.custom,
            "charts": {
                "suggested": charts.allocation(&report.suggested),
                "custom": charts.allocation(&report.custom),
            },
        })),
        OutputFormat::Text => {
            print_allocation(settings, "Suggested Allocation", &report.suggested);
            println!();
            print_allocation(settings, "Your Custom Allocation", &report.custom);
            Ok(())
        }
    }
}

fn print_allocation(settings: &Settings, title: &str, result: &AllocationResult) {
    let symbol = &settings.currency_symbol;
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
    let max = result
        .shares
        .iter()
        .map(|s| s.amount_allocated)
        .fold(0.0, f64::max);
    for share in &result.shares {
        println!(
            "{:<24} {:>6} {:>14}  {}",
            share.category,
            format_percentage(share.percentage),
            format_money(share.amount_allocated, symbol),
            format_bar(share.amount_allocated, max, BAR_WIDTH)
        );
    }
    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "{:<24} {:>6} {:>14}",
        "Disposable",
        "",
        format_money(result.disposable, symbol)
    );
    let total_pct: f64 = result.shares.iter().map(|s| s.percentage).sum();
    if (total_pct - 100.0).abs() > f64::EPSILON {
        println!(
            "Note: percentages add up to {}, so {} is allocated.",
            format_percentage(total_pct),
            format_money(result.total_allocated(), symbol)
        );
    }
}

// ── Projections ─────────────────────────────────────────────────────

pub fn print_sip(settings: &Settings, format: OutputFormat, projection: &SipProjection) -> Result<()> {
    let charts = ChartService::new();
    let series = charts.yearly_series(&projection.yearly_series);
    match format {
        OutputFormat::Json => print_json(&json!({
            "final_corpus": round2(projection.final_corpus),
            "total_invested": round2(projection.total_invested),
            "estimated_returns": round2(projection.estimated_returns),
            "extra_monthly_needed": projection.extra_monthly_needed.map(round2),
            "chart": series,
            "suggested_max": charts.suggested_max(&series),
        })),
        OutputFormat::Text => {
            let symbol = &settings.currency_symbol;
            println!("Estimated Corpus: {}", format_money(projection.final_corpus, symbol));
            println!("Total Invested:   {}", format_money(projection.total_invested, symbol));
            println!("Estimated Returns: {}", format_money(projection.estimated_returns, symbol));
            if let Some(extra) = projection.extra_monthly_needed {
                println!("Extra Monthly Investment Needed: {}", format_money(extra, symbol));
            }
            println!();
            print_series(settings, "SIP Value Over Time", &series, 12);
            Ok(())
        }
    }
}

pub fn print_savings(
    settings: &Settings,
    format: OutputFormat,
    projection: &SavingsProjection,
) -> Result<()> {
    let charts = ChartService::new();
    let series = charts.yearly_series(&projection.yearly_series);
    let breakdown = charts.asset_breakdown(&projection.breakdown);
    match format {
        OutputFormat::Json => print_json(&json!({
            "final_value": round2(projection.final_value),
            "total_contributed": round2(projection.total_contributed),
            "chart": series,
            "suggested_max": charts.suggested_max(&series),
            "breakdown": breakdown,
        })),
        OutputFormat::Text => {
            let symbol = &settings.currency_symbol;
            println!("Estimated Future Value: {}", format_money(projection.final_value, symbol));
            println!("Total Contributed:      {}", format_money(projection.total_contributed, symbol));
            println!();
            print_series(settings, "Savings Value Over Time", &series, 12);
            println!();
            print_series(settings, "Suggested Portfolio Split", &breakdown, 12);
            Ok(())
        }
    }
}

fn print_series(settings: &Settings, title: &str, points: &[ChartDataPoint], label_width: usize) {
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
    let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
    for point in points {
        println!(
            "{:<label_width$} {:>16}  {}",
            point.label,
            format_money(point.value, &settings.currency_symbol),
            format_bar(point.value, max, BAR_WIDTH)
        );
    }
}

// ── Expenses ────────────────────────────────────────────────────────

pub fn print_expenses(settings: &Settings, format: OutputFormat, expenses: &[&Expense]) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&json!(expenses)),
        OutputFormat::Text => {
            if expenses.is_empty() {
                println!("No expenses.");
                return Ok(());
            }
            println!(
                "{:<8}  {:<10}  {:<22}  {:>12}  Description",
                "ID", "Date", "Category", "Amount"
            );
            println!("{}", "-".repeat(RULE_WIDTH + 12));
            for expense in expenses {
                let id = expense.id.to_string();
                println!(
                    "{:<8}  {:<10}  {:<22}  {:>12}  {}",
                    &id[..8],
                    display_date(expense.date, &settings.date_format),
                    expense.category.label(),
                    format_money(expense.amount, &settings.currency_symbol),
                    expense.description
                );
            }
            Ok(())
        }
    }
}

pub fn print_summary(
    settings: &Settings,
    format: OutputFormat,
    totals: &[CategoryTotal],
) -> Result<()> {
    let charts = ChartService::new();
    let points = charts.category_totals(totals);
    let grand_total: f64 = totals.iter().map(|t| t.total).sum();
    match format {
        OutputFormat::Json => print_json(&json!({
            "totals": totals,
            "total": round2(grand_total),
            "chart": points,
        })),
        OutputFormat::Text => {
            print_series(settings, "Spending Trends", &points, 24);
            println!("{}", "-".repeat(RULE_WIDTH));
            println!(
                "{:<24} {:>16}",
                "Total",
                format_money(grand_total, &settings.currency_symbol)
            );
            Ok(())
        }
    }
}

// ── Guide ───────────────────────────────────────────────────────────

pub fn print_guide(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let guide: Vec<_> = ExpenseCategory::ALL
                .iter()
                .map(|c| json!({ "category": c.label(), "examples": c.examples() }))
                .collect();
            print_json(&json!(guide))
        }
        OutputFormat::Text => {
            println!("Expense Categories");
            println!("{}", "=".repeat(RULE_WIDTH));
            for category in ExpenseCategory::ALL {
                println!("{category}");
                for item in category.examples() {
                    println!("  - {item}");
                }
            }
            Ok(())
        }
    }
}

/// Render `date` with the configured format, falling back to ISO when the
/// format can't display a plain date.
fn display_date(date: NaiveDate, format: &str) -> String {
    let mut rendered = String::new();
    match write!(rendered, "{}", date.format(format)) {
        Ok(()) => rendered,
        Err(_) => date.to_string(),
    }
}

/// A horizontal bar proportional to `value / max_value`.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
