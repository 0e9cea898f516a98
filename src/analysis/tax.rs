//! Tax on rental income
//!
//! Rental income is taxed as Norwegian capital income at a flat rate. Loan
//! interest and operating costs are deductible; principal repayment is not.
//! A loss year simply pays no tax: there is no carry-forward and no offset
//! against other income.

use serde::{Deserialize, Serialize};

/// Default flat rate on capital income
pub const DEFAULT_TAX_RATE: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub taxable_income: f64,
    pub tax_rate: f64,
    pub annual_tax: f64,
    pub deductible_expenses: f64,
}

impl TaxBreakdown {
    pub fn new(
        effective_annual_rent: f64,
        annual_interest: f64,
        total_operating_costs: f64,
        tax_rate: f64,
    ) -> Self {
        let deductible_expenses = annual_interest + total_operating_costs;
        let taxable_income = (effective_annual_rent - deductible_expenses).max(0.0);

        Self {
            taxable_income,
            tax_rate,
            annual_tax: taxable_income * (tax_rate / 100.0),
            deductible_expenses,
        }
    }
}

/// Annual tax payable on the rental activity
pub fn annual_tax(
    effective_annual_rent: f64,
    annual_interest: f64,
    total_operating_costs: f64,
    tax_rate: f64,
) -> f64 {
    TaxBreakdown::new(effective_annual_rent, annual_interest, total_operating_costs, tax_rate)
        .annual_tax
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profitable_rental() {
        let tax = TaxBreakdown::new(171_000.0, 0.0, 51_000.0, DEFAULT_TAX_RATE);
        assert_eq!(tax.deductible_expenses, 51_000.0);
        assert_eq!(tax.taxable_income, 120_000.0);
        assert_relative_eq!(tax.annual_tax, 26_400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_loss_is_floored_at_zero() {
        let tax = TaxBreakdown::new(171_000.0, 163_625.0, 51_000.0, DEFAULT_TAX_RATE);
        assert_eq!(tax.taxable_income, 0.0);
        assert_eq!(tax.annual_tax, 0.0);
    }

    #[test]
    fn test_taxable_income_never_negative() {
        for &deductions in &[0.0, 1.0, 1e6, 1e12] {
            let tax = TaxBreakdown::new(50_000.0, deductions, deductions, 22.0);
            assert!(tax.taxable_income >= 0.0);
            assert!(tax.annual_tax >= 0.0);
        }
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(annual_tax(100_000.0, 0.0, 0.0, 0.0), 0.0);
    }
}
