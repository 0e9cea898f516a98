//! End-to-end checks of the rental analysis against worked examples

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rental_analysis::analysis::{
    monthly_payment, total_operating_costs, AcquisitionCosts, REGISTRATION_FEE,
};
use rental_analysis::{analyze, AmortizationSchedule, AnalysisInput};

fn scenario_a() -> AnalysisInput {
    AnalysisInput {
        purchase_price: 3_500_000.0,
        down_payment_percent: 15.0,
        interest_rate: 5.5,
        loan_term_years: 25.0,
        monthly_rent: 15_000.0,
        monthly_common_costs: 3_000.0,
        monthly_maintenance: 500.0,
        annual_insurance: 3_000.0,
        vacancy_rate_percent: 5.0,
        internet_tv: 500.0,
        tax_rate: 22.0,
    }
}

#[test]
fn scenario_a_typical_flat() {
    let result = analyze(&scenario_a());

    assert_eq!(result.loan.down_payment, 525_000.0);
    assert_eq!(result.loan.loan_amount, 2_975_000.0);
    assert_eq!(result.income.gross_annual_rent, 180_000.0);
    assert_eq!(result.income.vacancy_loss, 9_000.0);
    assert_eq!(result.income.effective_annual_rent, 171_000.0);
    assert_abs_diff_eq!(result.summary.gross_yield, 5.14, epsilon = 0.005);
    assert_abs_diff_eq!(result.summary.net_yield, 3.4286, epsilon = 1e-4);
    assert_abs_diff_eq!(result.summary.cash_on_cash, -18.90, epsilon = 0.005);
}

#[test]
fn scenario_b_zero_interest() {
    let input = AnalysisInput {
        interest_rate: 0.0,
        ..scenario_a()
    };
    let result = analyze(&input);

    assert_eq!(
        result.loan.monthly_mortgage,
        result.loan.loan_amount / (input.loan_term_years * 12.0)
    );
    assert_eq!(result.loan.annual_interest, 0.0);
    assert_eq!(result.tax.deductible_expenses, result.costs.total_operating_costs);
    assert_relative_eq!(result.tax.annual_tax, 26_400.0, epsilon = 1e-9);
}

#[test]
fn scenario_c_zero_rent() {
    let input = AnalysisInput {
        monthly_rent: 0.0,
        ..scenario_a()
    };
    let result = analyze(&input);

    assert_eq!(result.summary.gross_yield, 0.0);
    assert!(result.summary.net_yield < 0.0);
    assert_eq!(result.tax.taxable_income, 0.0);
    assert_eq!(result.tax.annual_tax, 0.0);
}

#[test]
fn scenario_d_all_cash_purchase() {
    let input = AnalysisInput {
        down_payment_percent: 100.0,
        ..scenario_a()
    };
    let result = analyze(&input);

    assert_eq!(result.loan.loan_amount, 0.0);
    assert_eq!(result.loan.monthly_mortgage, 0.0);
    assert_eq!(result.results.annual_cash_flow_before_tax, result.results.net_operating_income);

    // Without debt, cash on cash is the after-tax NOI over the full price
    let after_tax_noi = result.results.net_operating_income - result.tax.annual_tax;
    assert_relative_eq!(
        result.summary.cash_on_cash,
        after_tax_noi / input.purchase_price * 100.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(result.summary.cash_on_cash, 2.6743, epsilon = 1e-4);
}

#[test]
fn acquisition_costs_check() {
    let result = analyze(&scenario_a());
    assert_eq!(result.acquisition.document_fee, 87_500.0);
    assert_eq!(result.acquisition.total, 3_500_000.0 + 87_500.0 + REGISTRATION_FEE);
    assert_eq!(result.acquisition, AcquisitionCosts::standard(3_500_000.0));
}

#[test]
fn gross_equals_net_without_costs() {
    let input = AnalysisInput {
        purchase_price: 2_000_000.0,
        monthly_rent: 9_000.0,
        vacancy_rate_percent: 0.0,
        ..AnalysisInput::default()
    };
    let result = analyze(&input);
    assert_eq!(result.costs.total_operating_costs, 0.0);
    assert_eq!(result.summary.gross_yield, result.summary.net_yield);
}

#[test]
fn analysis_is_deterministic() {
    let input = scenario_a();
    let first = analyze(&input);
    let second = analyze(&input);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn analysis_uses_operating_cost_model() {
    let input = AnalysisInput {
        monthly_common_costs: 0.1,
        monthly_maintenance: 0.1,
        internet_tv: 0.1,
        annual_insurance: 333.3,
        ..scenario_a()
    };
    let result = analyze(&input);
    assert_eq!(
        result.costs.total_operating_costs,
        total_operating_costs(0.1, 0.1, 0.1, 333.3)
    );
}

#[test]
fn mortgage_edge_cases() {
    assert_eq!(monthly_payment(0.0, 5.5, 25.0), 0.0);
    assert_eq!(monthly_payment(0.0, 0.0, 25.0), 0.0);
    assert_eq!(monthly_payment(1_500_000.0, 0.0, 25.0), 1_500_000.0 / 300.0);
}

#[test]
fn schedule_does_not_change_analysis() {
    let input = scenario_a();
    let before = analyze(&input);
    let schedule = AmortizationSchedule::build_from(&input);
    let after = analyze(&input);

    assert_eq!(before, after);
    assert_relative_eq!(schedule.monthly_payment, before.loan.monthly_mortgage, epsilon = 1e-12);
    // The flat first-year interest overstates what the schedule actually charges
    assert!(schedule.yearly()[0].interest < before.loan.annual_interest);
}

#[test]
fn result_serializes_with_dashboard_field_names() {
    let result = analyze(&scenario_a());
    let json = serde_json::to_value(result).unwrap();

    assert_eq!(json["loan"]["loanAmount"], 2_975_000.0);
    assert_eq!(json["income"]["effectiveAnnualRent"], 171_000.0);
    assert!(json["costs"]["annualInternetTV"].is_number());
    assert!(json["results"]["monthlyCashFlowAfterTax"].is_number());
    assert!(json["summary"]["cashOnCash"].is_number());
    assert_eq!(json["acquisition"]["registrationFee"], 585.0);
}
