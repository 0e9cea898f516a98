//! Rental income after vacancy

use serde::{Deserialize, Serialize};

/// Annual rental income, gross and after vacancy loss
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeBreakdown {
    pub monthly_rent: f64,
    pub gross_annual_rent: f64,
    pub vacancy_rate_percent: f64,
    pub vacancy_loss: f64,
    pub effective_annual_rent: f64,
}

impl IncomeBreakdown {
    /// Apply a flat vacancy discount to twelve months of rent
    pub fn new(monthly_rent: f64, vacancy_rate_percent: f64) -> Self {
        let gross_annual_rent = monthly_rent * 12.0;
        let vacancy_loss = gross_annual_rent * (vacancy_rate_percent / 100.0);

        Self {
            monthly_rent,
            gross_annual_rent,
            vacancy_rate_percent,
            vacancy_loss,
            effective_annual_rent: gross_annual_rent - vacancy_loss,
        }
    }
}

/// Rent actually collected over a year
pub fn effective_annual_rent(monthly_rent: f64, vacancy_rate_percent: f64) -> f64 {
    IncomeBreakdown::new(monthly_rent, vacancy_rate_percent).effective_annual_rent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacancy_discount() {
        let income = IncomeBreakdown::new(15_000.0, 5.0);
        assert_eq!(income.gross_annual_rent, 180_000.0);
        assert_eq!(income.vacancy_loss, 9_000.0);
        assert_eq!(income.effective_annual_rent, 171_000.0);
    }

    #[test]
    fn test_no_vacancy() {
        assert_eq!(effective_annual_rent(10_000.0, 0.0), 120_000.0);
    }

    #[test]
    fn test_full_vacancy() {
        assert_eq!(effective_annual_rent(10_000.0, 100.0), 0.0);
    }
}
