// ═══════════════════════════════════════════════════════════════════
// Service Tests — BudgetService, ExpenseService, ProjectionService,
// ChartService, forms and formatting
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use uuid::Uuid;

use finwise_core::errors::CoreError;
use finwise_core::format::{format_money, format_percentage, round2};
use finwise_core::forms::{self, BudgetForm, ExpenseForm, SavingsForm, SipForm};
use finwise_core::models::allocation::{AllocationPlan, ALLOCATION_COLORS};
use finwise_core::models::expense::{Expense, ExpenseCategory, ExpenseFilter};
use finwise_core::models::projection::{SavingsInput, SipInput};
use finwise_core::services::budget_service::BudgetService;
use finwise_core::services::chart_service::ChartService;
use finwise_core::services::expense_service::ExpenseService;
use finwise_core::services::projection_service::{
    annuity_due_factor, monthly_rate, ProjectionService, MAX_YEARS,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn approx(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

// ═══════════════════════════════════════════════════════════════════
// BudgetService
// ═══════════════════════════════════════════════════════════════════

mod budget_service {
    use super::*;

    #[test]
    fn suggested_split_of_disposable() {
        let svc = BudgetService::new();
        let result = svc
            .allocate(50_000.0, 10_000.0, &AllocationPlan::suggested())
            .unwrap();

        assert_eq!(result.disposable, 40_000.0);
        let amounts: Vec<f64> = result.shares.iter().map(|s| s.amount_allocated).collect();
        assert_eq!(amounts, vec![20_000.0, 4_000.0, 4_000.0, 8_000.0, 4_000.0]);
        assert_eq!(result.shares[2].category, "Debt Payments");
    }

    #[test]
    fn shares_sum_to_disposable_when_plan_is_100() {
        let svc = BudgetService::new();
        let result = svc
            .allocate(73_219.55, 12_345.67, &AllocationPlan::suggested())
            .unwrap();
        assert!(approx(result.total_allocated(), result.disposable, 1e-6));
    }

    #[test]
    fn uneven_plan_allocates_proportionally() {
        let svc = BudgetService::new();
        let plan = AllocationPlan::from_pairs([("A", 60.0), ("B", 60.0)]);
        let result = svc.allocate(1_000.0, 0.0, &plan).unwrap();
        assert_eq!(result.total_allocated(), 1_200.0);
    }

    #[test]
    fn colors_follow_position_and_wrap() {
        let svc = BudgetService::new();
        let plan = AllocationPlan::from_pairs([
            ("A", 10.0),
            ("B", 10.0),
            ("C", 10.0),
            ("D", 10.0),
            ("E", 10.0),
            ("F", 10.0),
        ]);
        let result = svc.allocate(100.0, 0.0, &plan).unwrap();
        assert_eq!(result.shares[0].color, ALLOCATION_COLORS[0]);
        assert_eq!(result.shares[4].color, ALLOCATION_COLORS[4]);
        assert_eq!(result.shares[5].color, ALLOCATION_COLORS[0]);
    }

    #[test]
    fn savings_equal_to_income_is_rejected() {
        let svc = BudgetService::new();
        let err = svc
            .allocate(1_000.0, 1_000.0, &AllocationPlan::suggested())
            .unwrap_err();
        match err {
            CoreError::ValidationError(msg) => assert!(msg.contains("less than income")),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn savings_above_income_is_rejected() {
        let svc = BudgetService::new();
        assert!(svc
            .allocate(1_000.0, 2_000.0, &AllocationPlan::suggested())
            .is_err());
    }

    #[test]
    fn negative_or_nan_amounts_are_rejected() {
        let svc = BudgetService::new();
        let plan = AllocationPlan::suggested();
        assert!(svc.allocate(-1.0, 0.0, &plan).is_err());
        assert!(svc.allocate(100.0, -1.0, &plan).is_err());
        assert!(svc.allocate(f64::NAN, 0.0, &plan).is_err());
    }

    #[test]
    fn negative_percentage_is_rejected() {
        let svc = BudgetService::new();
        let plan = AllocationPlan::from_pairs([("A", -10.0)]);
        assert!(svc.allocate(100.0, 0.0, &plan).is_err());
    }

    #[test]
    fn empty_plan_gives_no_shares() {
        let svc = BudgetService::new();
        let result = svc.allocate(100.0, 10.0, &AllocationPlan::new()).unwrap();
        assert!(result.shares.is_empty());
        assert_eq!(result.disposable, 90.0);
    }

    #[test]
    fn report_has_both_allocations() {
        let svc = BudgetService::new();
        let mut custom = AllocationPlan::suggested();
        custom.set_percentage("Savings", 30.0);
        let report = svc.budget_report(10_000.0, 2_000.0, &custom).unwrap();

        assert_eq!(report.suggested.shares[3].amount_allocated, 1_600.0);
        assert_eq!(report.custom.shares[3].amount_allocated, 2_400.0);
        assert_eq!(report.suggested.disposable, report.custom.disposable);
    }
}

// ═══════════════════════════════════════════════════════════════════
// ExpenseService
// ═══════════════════════════════════════════════════════════════════

mod expense_service {
    use super::*;

    fn log_of(entries: &[(f64, ExpenseCategory, NaiveDate, &str)]) -> Vec<Expense> {
        let svc = ExpenseService::new();
        let mut expenses = Vec::new();
        for (amount, category, date, description) in entries {
            svc.add_expense(
                &mut expenses,
                Expense::new(*amount, *category, *date, *description),
            )
            .unwrap();
        }
        expenses
    }

    fn sample() -> Vec<Expense> {
        log_of(&[
            (1200.0, ExpenseCategory::Necessities, d(2025, 1, 20), "rent"),
            (300.0, ExpenseCategory::Healthcare, d(2025, 1, 5), "pharmacy"),
            (250.0, ExpenseCategory::Necessities, d(2025, 1, 5), "groceries"),
            (80.0, ExpenseCategory::DiscretionarySpending, d(2025, 2, 2), "cinema"),
        ])
    }

    #[test]
    fn add_rejects_non_positive_amount() {
        let svc = ExpenseService::new();
        let mut expenses = Vec::new();
        let zero = Expense::new(0.0, ExpenseCategory::Savings, d(2025, 1, 1), "x");
        let negative = Expense::new(-5.0, ExpenseCategory::Savings, d(2025, 1, 1), "x");
        assert!(svc.add_expense(&mut expenses, zero).is_err());
        assert!(svc.add_expense(&mut expenses, negative).is_err());
        assert!(expenses.is_empty());
    }

    #[test]
    fn add_rejects_blank_description() {
        let svc = ExpenseService::new();
        let mut expenses = Vec::new();
        let blank = Expense::new(5.0, ExpenseCategory::Savings, d(2025, 1, 1), "   ");
        assert!(svc.add_expense(&mut expenses, blank).is_err());
    }

    #[test]
    fn add_stores_trimmed_description() {
        let svc = ExpenseService::new();
        let mut expenses = Vec::new();
        let padded = Expense::new(5.0, ExpenseCategory::Savings, d(2025, 1, 1), "  deposit \n");
        svc.add_expense(&mut expenses, padded).unwrap();
        assert_eq!(expenses[0].description, "deposit");
    }

    #[test]
    fn sorted_ascending_with_stable_ties() {
        let svc = ExpenseService::new();
        let expenses = sample();
        let view = svc.filter_and_sort(&expenses, &ExpenseFilter::new());
        let order: Vec<&str> = view.iter().map(|e| e.description.as_str()).collect();
        // Both Jan 5 entries keep their log order
        assert_eq!(order, vec!["pharmacy", "groceries", "rent", "cinema"]);
    }

    #[test]
    fn filtering_does_not_touch_the_log() {
        let svc = ExpenseService::new();
        let expenses = sample();
        let before = expenses.clone();
        let filter = ExpenseFilter::new().with_category(ExpenseCategory::Healthcare);
        let _ = svc.filter_and_sort(&expenses, &filter);
        assert_eq!(expenses, before);
    }

    #[test]
    fn filter_is_idempotent() {
        let svc = ExpenseService::new();
        let expenses = sample();
        let filter = ExpenseFilter::new().from(d(2025, 1, 1)).to(d(2025, 1, 31));
        let once = svc.filter_and_sort(&expenses, &filter);
        let twice = svc.filter_and_sort(once.iter().copied(), &filter);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn aggregate_in_category_order_with_zeros() {
        let svc = ExpenseService::new();
        let expenses = sample();
        let totals = svc.aggregate_by_category(&expenses);

        let categories: Vec<ExpenseCategory> = totals.iter().map(|t| t.category).collect();
        assert_eq!(categories, ExpenseCategory::ALL.to_vec());

        let amounts: Vec<f64> = totals.iter().map(|t| t.total).collect();
        assert_eq!(amounts, vec![1450.0, 300.0, 0.0, 0.0, 80.0]);
    }

    #[test]
    fn aggregate_of_nothing_is_all_zero() {
        let svc = ExpenseService::new();
        let totals = svc.aggregate_by_category(&Vec::<Expense>::new());
        assert_eq!(totals.len(), 5);
        assert!(totals.iter().all(|t| t.total == 0.0));
    }

    #[test]
    fn aggregate_respects_filtered_view() {
        let svc = ExpenseService::new();
        let expenses = sample();
        let view = svc.filter_and_sort(&expenses, &ExpenseFilter::new().from(d(2025, 2, 1)));
        let totals = svc.aggregate_by_category(view);
        assert_eq!(totals[4].total, 80.0);
        assert_eq!(totals[0].total, 0.0);
    }

    #[test]
    fn total_sums_amounts() {
        let svc = ExpenseService::new();
        assert_eq!(svc.total(&sample()), 1830.0);
    }

    #[test]
    fn remove_by_id_from_a_filtered_view() {
        let svc = ExpenseService::new();
        let mut expenses = sample();
        let filter = ExpenseFilter::new().with_category(ExpenseCategory::Necessities);
        // Second row of the view is "rent", which sits at log index 0
        let target = svc.filter_and_sort(&expenses, &filter)[1].id;

        let removed = svc.remove_expense(&mut expenses, target).unwrap();
        assert_eq!(removed.description, "rent");
        assert_eq!(expenses.len(), 3);
        assert!(expenses.iter().all(|e| e.id != target));
    }

    #[test]
    fn remove_unknown_id() {
        let svc = ExpenseService::new();
        let mut expenses = sample();
        let err = svc.remove_expense(&mut expenses, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, CoreError::ExpenseNotFound(_)));
        assert_eq!(expenses.len(), 4);
    }

    #[test]
    fn remove_at_uses_insertion_order() {
        let svc = ExpenseService::new();
        let mut expenses = sample();
        let removed = svc.remove_expense_at(&mut expenses, 1).unwrap();
        assert_eq!(removed.description, "pharmacy");
        assert_eq!(expenses[1].description, "groceries");
    }

    #[test]
    fn remove_at_out_of_range() {
        let svc = ExpenseService::new();
        let mut expenses = sample();
        assert!(matches!(
            svc.remove_expense_at(&mut expenses, 4),
            Err(CoreError::ExpenseNotFound(_))
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
// ProjectionService
// ═══════════════════════════════════════════════════════════════════

mod projection_service {
    use super::*;

    #[test]
    fn monthly_rate_from_annual_percent() {
        assert!(approx(monthly_rate(12.0), 0.01, 1e-12));
    }

    #[test]
    fn zero_rate_factor_is_month_count() {
        assert_eq!(annuity_due_factor(0.0, 120), 120.0);
    }

    #[test]
    fn sip_reference_value() {
        let svc = ProjectionService::new();
        let p = svc.project_sip(&SipInput::new(5000.0, 12.0, 10)).unwrap();
        assert!(approx(p.final_corpus, 1_161_695.38, 1.0), "{}", p.final_corpus);
        assert_eq!(p.total_invested, 600_000.0);
        assert!(approx(p.estimated_returns, p.final_corpus - 600_000.0, 1e-9));
        assert_eq!(p.extra_monthly_needed, None);
    }

    #[test]
    fn sip_series_has_one_point_per_year_and_grows() {
        let svc = ProjectionService::new();
        let p = svc.project_sip(&SipInput::new(5000.0, 12.0, 10)).unwrap();
        assert_eq!(p.yearly_series.len(), 10);
        assert!(p.yearly_series.windows(2).all(|w| w[1] > w[0]));
        assert!(approx(*p.yearly_series.last().unwrap(), p.final_corpus, 1e-6));
    }

    #[test]
    fn sip_target_already_met_needs_nothing() {
        let svc = ProjectionService::new();
        let p = svc
            .project_sip(&SipInput::new(5000.0, 12.0, 10).with_target(1_000_000.0))
            .unwrap();
        assert_eq!(p.extra_monthly_needed, None);
    }

    #[test]
    fn sip_shortfall_closes_the_gap() {
        let svc = ProjectionService::new();
        let input = SipInput::new(5000.0, 12.0, 10).with_target(2_000_000.0);
        let p = svc.project_sip(&input).unwrap();
        let extra = p.extra_monthly_needed.unwrap();
        assert!(extra > 0.0);

        let topped_up = svc
            .project_sip(&SipInput::new(5000.0 + extra, 12.0, 10))
            .unwrap();
        assert!(approx(topped_up.final_corpus, 2_000_000.0, 1e-4));
    }

    #[test]
    fn sip_zero_rate_is_plain_sum() {
        let svc = ProjectionService::new();
        let p = svc.project_sip(&SipInput::new(5000.0, 0.0, 10)).unwrap();
        assert_eq!(p.final_corpus, 600_000.0);
        assert_eq!(p.estimated_returns, 0.0);
        assert_eq!(p.yearly_series[0], 60_000.0);
    }

    #[test]
    fn sip_rejects_bad_input() {
        let svc = ProjectionService::new();
        assert!(svc.project_sip(&SipInput::new(0.0, 12.0, 10)).is_err());
        assert!(svc.project_sip(&SipInput::new(100.0, 12.0, 0)).is_err());
        assert!(svc.project_sip(&SipInput::new(100.0, -100.0, 10)).is_err());
        assert!(svc.project_sip(&SipInput::new(100.0, f64::NAN, 10)).is_err());
        assert!(svc
            .project_sip(&SipInput::new(100.0, 12.0, 10).with_target(-1.0))
            .is_err());
    }

    #[test]
    fn horizon_is_capped() {
        let svc = ProjectionService::new();
        let longest = svc
            .project_sip(&SipInput::new(100.0, 8.0, MAX_YEARS))
            .unwrap();
        assert_eq!(longest.yearly_series.len(), MAX_YEARS as usize);

        for years in [MAX_YEARS + 1, u32::MAX] {
            assert!(matches!(
                svc.project_sip(&SipInput::new(5000.0, 12.0, years)),
                Err(CoreError::ValidationError(_))
            ));
            assert!(matches!(
                svc.project_savings(&SavingsInput::new(0.0, 5000.0, 12.0, years)),
                Err(CoreError::ValidationError(_))
            ));
        }
    }

    #[test]
    fn overflowing_result_is_rejected() {
        let svc = ProjectionService::new();
        assert!(matches!(
            svc.project_sip(&SipInput::new(5000.0, 1.0e6, MAX_YEARS)),
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            svc.project_savings(&SavingsInput::new(1.0e300, 0.0, 1.0e6, MAX_YEARS)),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn savings_all_zero() {
        let svc = ProjectionService::new();
        let p = svc
            .project_savings(&SavingsInput::new(0.0, 0.0, 0.0, 5))
            .unwrap();
        assert_eq!(p.final_value, 0.0);
        assert_eq!(p.yearly_series, vec![0.0; 5]);
        assert_eq!(p.breakdown.total(), 0.0);
    }

    #[test]
    fn savings_lump_sum_only_compounds() {
        let svc = ProjectionService::new();
        let p = svc
            .project_savings(&SavingsInput::new(10_000.0, 0.0, 12.0, 1))
            .unwrap();
        assert!(approx(p.final_value, 10_000.0 * 1.01_f64.powi(12), 1e-6));
        assert_eq!(p.total_contributed, 10_000.0);
    }

    #[test]
    fn savings_monthly_matches_sip() {
        let svc = ProjectionService::new();
        let savings = svc
            .project_savings(&SavingsInput::new(0.0, 5000.0, 12.0, 10))
            .unwrap();
        let sip = svc.project_sip(&SipInput::new(5000.0, 12.0, 10)).unwrap();
        assert!(approx(savings.final_value, sip.final_corpus, 1e-6));
    }

    #[test]
    fn savings_breakdown_splits_final_value() {
        let svc = ProjectionService::new();
        let p = svc
            .project_savings(&SavingsInput::new(100_000.0, 2_000.0, 8.0, 15))
            .unwrap();
        assert!(approx(p.breakdown.stocks, p.final_value * 0.5, 1e-6));
        assert!(approx(p.breakdown.cash, p.final_value * 0.1, 1e-6));
        assert!(approx(p.breakdown.total(), p.final_value, 1e-6));
        assert_eq!(p.total_contributed, 100_000.0 + 2_000.0 * 180.0);
    }

    #[test]
    fn savings_rejects_negative_amounts() {
        let svc = ProjectionService::new();
        assert!(svc
            .project_savings(&SavingsInput::new(-1.0, 0.0, 5.0, 5))
            .is_err());
        assert!(svc
            .project_savings(&SavingsInput::new(0.0, -1.0, 5.0, 5))
            .is_err());
        assert!(svc
            .project_savings(&SavingsInput::new(0.0, 0.0, 5.0, 0))
            .is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// ChartService
// ═══════════════════════════════════════════════════════════════════

mod chart_service {
    use super::*;
    use finwise_core::models::projection::AssetBreakdown;

    #[test]
    fn yearly_labels_and_rounding() {
        let points = ChartService::new().yearly_series(&[100.126, 200.0]);
        assert_eq!(points[0].label, "Year 1");
        assert_eq!(points[0].value, 100.13);
        assert_eq!(points[1].label, "Year 2");
    }

    #[test]
    fn allocation_follows_plan_order() {
        let result = BudgetService::new()
            .allocate(1_000.0, 0.0, &AllocationPlan::suggested())
            .unwrap();
        let points = ChartService::new().allocation(&result);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].label, "Necessities");
        assert_eq!(points[0].value, 500.0);
    }

    #[test]
    fn category_totals_use_labels() {
        let totals = ExpenseService::new().aggregate_by_category(&Vec::<Expense>::new());
        let points = ChartService::new().category_totals(&totals);
        assert_eq!(points[2].label, "Debt Payments");
        assert_eq!(points[2].value, 0.0);
    }

    #[test]
    fn asset_breakdown_points() {
        let points = ChartService::new().asset_breakdown(&AssetBreakdown::from_total(200.0));
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Stocks", "Bonds", "Real Estate", "Cash"]);
        assert_eq!(points[1].value, 50.0);
    }

    #[test]
    fn suggested_max_adds_headroom() {
        let charts = ChartService::new();
        let points = charts.yearly_series(&[10.0, 50.0, 20.0]);
        assert!(approx(charts.suggested_max(&points).unwrap(), 60.0, 1e-9));
        assert_eq!(charts.suggested_max(&[]), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Forms
// ═══════════════════════════════════════════════════════════════════

mod form_parsing {
    use super::*;

    #[test]
    fn numbers_accept_symbol_and_separators() {
        assert_eq!(forms::parse_required("income", " ₹1,50,000 ").unwrap(), 150_000.0);
        assert_eq!(forms::parse_required("income", "$2,500.50").unwrap(), 2_500.5);
    }

    #[test]
    fn budget_requires_both_fields() {
        assert!(matches!(
            BudgetForm::new("", "100").parse(),
            Err(CoreError::MissingField(f)) if f == "income"
        ));
        assert!(matches!(
            BudgetForm::new("1000", "abc").parse(),
            Err(CoreError::InvalidNumber { .. })
        ));
        assert_eq!(BudgetForm::new("1000", "100").parse().unwrap(), (1000.0, 100.0));
    }

    #[test]
    fn sip_target_is_optional() {
        let form = SipForm {
            monthly_investment: "5000".into(),
            annual_rate: "12".into(),
            years: "10".into(),
            target_corpus: String::new(),
        };
        let input = form.parse().unwrap();
        assert_eq!(input.target_corpus, None);
        assert_eq!(input.years, 10);
    }

    #[test]
    fn sip_malformed_target_is_rejected() {
        let form = SipForm {
            monthly_investment: "5000".into(),
            annual_rate: "12".into(),
            years: "10".into(),
            target_corpus: "lots".into(),
        };
        assert!(matches!(
            form.parse(),
            Err(CoreError::InvalidNumber { field, .. }) if field == "target corpus"
        ));
    }

    #[test]
    fn sip_blank_rate_is_missing() {
        let form = SipForm {
            monthly_investment: "5000".into(),
            annual_rate: " ".into(),
            years: "10".into(),
            target_corpus: String::new(),
        };
        assert!(matches!(form.parse(), Err(CoreError::MissingField(_))));
    }

    #[test]
    fn savings_blanks_become_zero() {
        let form = SavingsForm {
            years: "5".into(),
            ..SavingsForm::default()
        };
        assert_eq!(form.parse().unwrap(), SavingsInput::new(0.0, 0.0, 0.0, 5));
    }

    #[test]
    fn savings_malformed_amount_is_rejected() {
        let form = SavingsForm {
            current_savings: "ten".into(),
            years: "5".into(),
            ..SavingsForm::default()
        };
        assert!(form.parse().is_err());
    }

    #[test]
    fn savings_still_needs_years() {
        assert!(matches!(
            SavingsForm::default().parse(),
            Err(CoreError::MissingField(f)) if f == "years"
        ));
    }

    #[test]
    fn years_rules() {
        assert_eq!(forms::parse_years(" 3 ").unwrap(), 3);
        assert!(matches!(forms::parse_years("0"), Err(CoreError::ValidationError(_))));
        assert!(matches!(forms::parse_years("-2"), Err(CoreError::ValidationError(_))));
        assert!(matches!(forms::parse_years("2.5"), Err(CoreError::InvalidNumber { .. })));
        assert_eq!(forms::parse_years("100").unwrap(), MAX_YEARS);
        assert!(matches!(forms::parse_years("101"), Err(CoreError::ValidationError(_))));
        assert!(matches!(
            forms::parse_years("4294967295"),
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            forms::parse_years("99999999999"),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn percentage_is_lenient() {
        assert_eq!(forms::parse_percentage("15"), 15.0);
        assert_eq!(forms::parse_percentage("12.5%"), 12.5);
        assert_eq!(forms::parse_percentage(""), 0.0);
        assert_eq!(forms::parse_percentage("abc"), 0.0);
    }

    #[test]
    fn dates() {
        let today = d(2025, 3, 14);
        assert_eq!(forms::parse_date("", today).unwrap(), today);
        assert_eq!(forms::parse_date("Today", today).unwrap(), today);
        assert_eq!(forms::parse_date("2024-02-29", today).unwrap(), d(2024, 2, 29));
        assert!(forms::parse_date("2023-02-29", today).is_err());
        assert!(forms::parse_date("14/03/2025", today).is_err());
    }

    #[test]
    fn expense_form_builds_expense() {
        let form = ExpenseForm {
            amount: "₹450".into(),
            category: "healthcare".into(),
            date: String::new(),
            description: "  checkup ".into(),
        };
        let expense = form.parse_on(d(2025, 3, 14)).unwrap();
        assert_eq!(expense.amount, 450.0);
        assert_eq!(expense.category, ExpenseCategory::Healthcare);
        assert_eq!(expense.date, d(2025, 3, 14));
        assert_eq!(expense.description, "checkup");
    }

    #[test]
    fn expense_form_rules() {
        let base = ExpenseForm {
            amount: "10".into(),
            category: "Savings".into(),
            date: "2025-01-01".into(),
            description: "deposit".into(),
        };
        let today = d(2025, 3, 14);

        let zero = ExpenseForm {
            amount: "0".into(),
            ..base.clone()
        };
        assert!(matches!(zero.parse_on(today), Err(CoreError::ValidationError(_))));

        let no_category = ExpenseForm {
            category: " ".into(),
            ..base.clone()
        };
        assert!(matches!(
            no_category.parse_on(today),
            Err(CoreError::MissingField(f)) if f == "category"
        ));

        let no_description = ExpenseForm {
            description: String::new(),
            ..base.clone()
        };
        assert!(matches!(
            no_description.parse_on(today),
            Err(CoreError::MissingField(f)) if f == "description"
        ));

        assert!(base.parse_on(today).is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Formatting
// ═══════════════════════════════════════════════════════════════════

mod formatting {
    use super::*;

    #[test]
    fn money() {
        assert_eq!(format_money(1_161_695.3812, "₹"), "₹1161695.38");
        assert_eq!(format_money(12.5, "$"), "$12.50");
        assert_eq!(format_money(-5.0, "€"), "-€5.00");
        assert_eq!(format_money(-0.001, "₹"), "₹0.00");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percentage(20.0), "20%");
        assert_eq!(format_percentage(12.5), "12.50%");
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(2.675_1), 2.68);
        assert_eq!(round2(-1.234), -1.23);
    }
}
