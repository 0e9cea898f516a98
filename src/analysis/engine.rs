//! Complete rental analysis from one set of inputs
//!
//! Each model is evaluated independently and the figures are combined here.
//! Nothing is cached: the calculator reruns on every input change.

use super::acquisition::{acquisition_costs, DEFAULT_DOCUMENT_FEE_RATE};
use super::costs::CostBreakdown;
use super::income::IncomeBreakdown;
use super::input::AnalysisInput;
use super::mortgage::{first_year_interest, monthly_payment};
use super::result::{AnalysisResult, AnalysisSummary, CashFlowResults, LoanDetails};
use super::tax::TaxBreakdown;
use super::yields::{cash_on_cash, gross_yield, net_yield};

/// Run the full financial model for one property
///
/// Total over any numeric input: every ratio guards its denominator, so
/// out-of-range slider values produce odd numbers rather than errors.
pub fn analyze(input: &AnalysisInput) -> AnalysisResult {
    // Loan
    let down_payment = input.down_payment();
    let loan_amount = input.purchase_price - down_payment;
    let monthly_mortgage = monthly_payment(loan_amount, input.interest_rate, input.loan_term_years);
    let annual_mortgage = monthly_mortgage * 12.0;

    // Interest on the opening balance stands in for the whole first year
    let annual_interest = first_year_interest(loan_amount, input.interest_rate);
    let annual_principal = annual_mortgage - annual_interest;

    let income = IncomeBreakdown::new(input.monthly_rent, input.vacancy_rate_percent);

    let costs = CostBreakdown::new(
        input.monthly_common_costs,
        input.monthly_maintenance,
        input.internet_tv,
        input.annual_insurance,
        monthly_mortgage,
    );

    let net_operating_income = income.effective_annual_rent - costs.total_operating_costs;
    let annual_cash_flow_before_tax = net_operating_income - annual_mortgage;

    let tax = TaxBreakdown::new(
        income.effective_annual_rent,
        annual_interest,
        costs.total_operating_costs,
        input.tax_rate,
    );

    let annual_cash_flow_after_tax = annual_cash_flow_before_tax - tax.annual_tax;
    let monthly_cash_flow_after_tax = annual_cash_flow_after_tax / 12.0;

    let gross = gross_yield(income.gross_annual_rent, input.purchase_price);
    let net = net_yield(
        income.effective_annual_rent,
        costs.total_operating_costs,
        input.purchase_price,
    );
    let coc = cash_on_cash(annual_cash_flow_after_tax, down_payment);

    let acquisition = acquisition_costs(input.purchase_price, DEFAULT_DOCUMENT_FEE_RATE);

    log::trace!(
        "analyzed price={} rent={}: cash flow {:.2}/yr, gross {:.2}%, net {:.2}%",
        input.purchase_price,
        input.monthly_rent,
        annual_cash_flow_after_tax,
        gross,
        net
    );

    AnalysisResult {
        summary: AnalysisSummary {
            monthly_rent: input.monthly_rent,
            monthly_cash_flow: monthly_cash_flow_after_tax,
            annual_cash_flow: annual_cash_flow_after_tax,
            gross_yield: gross,
            net_yield: net,
            cash_on_cash: coc,
        },
        loan: LoanDetails {
            purchase_price: input.purchase_price,
            down_payment,
            down_payment_percent: input.down_payment_percent,
            loan_amount,
            interest_rate: input.interest_rate,
            loan_term_years: input.loan_term_years,
            monthly_mortgage,
            annual_mortgage,
            annual_interest,
            annual_principal,
        },
        income,
        costs,
        tax,
        results: CashFlowResults {
            net_operating_income,
            annual_cash_flow_before_tax,
            annual_cash_flow_after_tax,
            monthly_cash_flow_after_tax,
        },
        acquisition,
    }
}
