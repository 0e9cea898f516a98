//! Output structures for a rental analysis

use serde::{Deserialize, Serialize};

use super::acquisition::AcquisitionCosts;
use super::costs::CostBreakdown;
use super::income::IncomeBreakdown;
use super::tax::TaxBreakdown;

/// Headline figures shown at the top of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub monthly_rent: f64,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
    pub gross_yield: f64,
    pub net_yield: f64,
    pub cash_on_cash: f64,
}

/// Financing terms and first-year debt service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDetails {
    pub purchase_price: f64,
    pub down_payment: f64,
    pub down_payment_percent: f64,
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub loan_term_years: f64,
    pub monthly_mortgage: f64,
    pub annual_mortgage: f64,
    /// First-year interest on the opening balance
    pub annual_interest: f64,
    pub annual_principal: f64,
}

/// Operating result and cash flow before and after tax
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowResults {
    pub net_operating_income: f64,
    pub annual_cash_flow_before_tax: f64,
    pub annual_cash_flow_after_tax: f64,
    pub monthly_cash_flow_after_tax: f64,
}

/// Complete analysis result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: AnalysisSummary,
    pub loan: LoanDetails,
    pub income: IncomeBreakdown,
    pub costs: CostBreakdown,
    pub tax: TaxBreakdown,
    pub results: CashFlowResults,
    pub acquisition: AcquisitionCosts,
}

impl AnalysisResult {
    /// Whether the property pays for itself after tax
    pub fn is_cash_flow_positive(&self) -> bool {
        self.results.annual_cash_flow_after_tax >= 0.0
    }

    /// Monthly amount the owner must top up (0 when cash flow is positive)
    pub fn monthly_shortfall(&self) -> f64 {
        (-self.results.monthly_cash_flow_after_tax).max(0.0)
    }

    /// Equity plus transfer fees needed at closing
    pub fn cash_required_at_closing(&self) -> f64 {
        self.loan.down_payment + self.acquisition.closing_costs()
    }
}
