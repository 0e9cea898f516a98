//! Input parameters for a rental investment analysis

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// All parameters of one rental analysis
///
/// Percentages are expressed as percentages (5.5 means 5.5%), never as
/// fractions. Missing fields in JSON take the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisInput {
    /// Purchase price in NOK
    pub purchase_price: f64,

    /// Equity share of the purchase price (default 15%)
    pub down_payment_percent: f64,

    /// Annual nominal interest rate (default 5.5%)
    pub interest_rate: f64,

    /// Loan term in years (default 25)
    pub loan_term_years: f64,

    /// Expected monthly rent
    pub monthly_rent: f64,

    /// Monthly common costs (felleskostnader)
    pub monthly_common_costs: f64,

    /// Monthly maintenance reserve
    pub monthly_maintenance: f64,

    /// Annual home insurance
    pub annual_insurance: f64,

    /// Share of the year the unit is expected to stand empty (default 5%)
    pub vacancy_rate_percent: f64,

    /// Monthly internet/TV paid by the owner
    #[serde(rename = "internetTV")]
    pub internet_tv: f64,

    /// Flat tax rate on capital income (default 22%)
    pub tax_rate: f64,
}

impl Default for AnalysisInput {
    fn default() -> Self {
        Self {
            purchase_price: 0.0,
            down_payment_percent: 15.0,
            interest_rate: 5.5,
            loan_term_years: 25.0,
            monthly_rent: 0.0,
            monthly_common_costs: 0.0,
            monthly_maintenance: 0.0,
            annual_insurance: 0.0,
            vacancy_rate_percent: 5.0,
            internet_tv: 0.0,
            tax_rate: 22.0,
        }
    }
}

impl AnalysisInput {
    /// The calculator's starting point: a typical 3.5M NOK rental flat
    pub fn dashboard_example() -> Self {
        Self {
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

    /// Equity put into the purchase
    pub fn down_payment(&self) -> f64 {
        self.purchase_price * (self.down_payment_percent / 100.0)
    }

    /// Borrowed part of the purchase price
    pub fn loan_amount(&self) -> f64 {
        self.purchase_price - self.down_payment()
    }

    /// Parse from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = AnalysisInput::default();
        assert_eq!(input.purchase_price, 0.0);
        assert_eq!(input.down_payment_percent, 15.0);
        assert_eq!(input.interest_rate, 5.5);
        assert_eq!(input.loan_term_years, 25.0);
        assert_eq!(input.vacancy_rate_percent, 5.0);
        assert_eq!(input.tax_rate, 22.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let input = AnalysisInput::from_json_str(
            r#"{"purchasePrice": 2000000, "monthlyRent": 12000, "internetTV": 450}"#,
        )
        .unwrap();

        assert_eq!(input.purchase_price, 2_000_000.0);
        assert_eq!(input.monthly_rent, 12_000.0);
        assert_eq!(input.internet_tv, 450.0);
        assert_eq!(input.interest_rate, 5.5);
        assert_eq!(input.down_payment_percent, 15.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = AnalysisInput::from_json_str(r#"{"purchasePrice": "lots"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }

    #[test]
    fn test_loan_split() {
        let input = AnalysisInput::dashboard_example();
        assert_eq!(input.down_payment(), 525_000.0);
        assert_eq!(input.loan_amount(), 2_975_000.0);
    }
}
