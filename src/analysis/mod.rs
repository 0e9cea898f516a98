//! Rental investment financial model

mod acquisition;
mod costs;
mod engine;
mod income;
mod input;
mod mortgage;
mod result;
mod schedule;
mod tax;
mod yields;

pub use acquisition::{acquisition_costs, AcquisitionCosts, DEFAULT_DOCUMENT_FEE_RATE, REGISTRATION_FEE};
pub use costs::{total_operating_costs, CostBreakdown};
pub use engine::analyze;
pub use income::{effective_annual_rent, IncomeBreakdown};
pub use input::AnalysisInput;
pub use mortgage::{first_year_interest, monthly_payment, monthly_rate, PAYMENTS_PER_YEAR};
pub use result::{AnalysisResult, AnalysisSummary, CashFlowResults, LoanDetails};
pub use schedule::{AmortizationRow, AmortizationSchedule, AmortizationYear, MAX_SCHEDULE_MONTHS};
pub use tax::{annual_tax, TaxBreakdown, DEFAULT_TAX_RATE};
pub use yields::{cash_on_cash, gross_yield, net_yield};
