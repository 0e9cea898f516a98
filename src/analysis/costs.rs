//! Recurring operating costs

use serde::{Deserialize, Serialize};

/// Annualized operating costs plus the debt service shown alongside them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub monthly_common_costs: f64,
    pub annual_common_costs: f64,
    pub monthly_maintenance: f64,
    pub annual_maintenance: f64,
    pub annual_insurance: f64,
    #[serde(rename = "annualInternetTV")]
    pub annual_internet_tv: f64,
    pub total_operating_costs: f64,
    pub monthly_mortgage: f64,
    pub annual_mortgage: f64,
}

impl CostBreakdown {
    /// Annualize the monthly cost items and add insurance
    ///
    /// Mortgage payments are carried for display only and are not part of
    /// `total_operating_costs`.
    pub fn new(
        monthly_common_costs: f64,
        monthly_maintenance: f64,
        internet_tv: f64,
        annual_insurance: f64,
        monthly_mortgage: f64,
    ) -> Self {
        let annual_common_costs = monthly_common_costs * 12.0;
        let annual_maintenance = monthly_maintenance * 12.0;
        let annual_internet_tv = internet_tv * 12.0;

        Self {
            monthly_common_costs,
            annual_common_costs,
            monthly_maintenance,
            annual_maintenance,
            annual_insurance,
            annual_internet_tv,
            total_operating_costs: total_operating_costs(
                monthly_common_costs,
                monthly_maintenance,
                internet_tv,
                annual_insurance,
            ),
            monthly_mortgage,
            annual_mortgage: monthly_mortgage * 12.0,
        }
    }
}

/// Total yearly operating costs of the unit
pub fn total_operating_costs(
    monthly_common_costs: f64,
    monthly_maintenance: f64,
    internet_tv: f64,
    annual_insurance: f64,
) -> f64 {
    (monthly_common_costs + monthly_maintenance + internet_tv) * 12.0 + annual_insurance
}
