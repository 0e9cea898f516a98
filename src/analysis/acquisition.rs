//! One-time acquisition costs

use serde::{Deserialize, Serialize};

/// Document fee (dokumentavgift) as a percentage of the purchase price
pub const DEFAULT_DOCUMENT_FEE_RATE: f64 = 2.5;

/// State fee for registering the deed (tinglysingsgebyr), NOK as of 2024
pub const REGISTRATION_FEE: f64 = 585.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionCosts {
    pub purchase_price: f64,
    pub document_fee: f64,
    pub registration_fee: f64,
    pub total: f64,
}

/// Purchase price plus transfer fees
pub fn acquisition_costs(purchase_price: f64, document_fee_rate: f64) -> AcquisitionCosts {
    let document_fee = purchase_price * (document_fee_rate / 100.0);

    AcquisitionCosts {
        purchase_price,
        document_fee,
        registration_fee: REGISTRATION_FEE,
        total: purchase_price + document_fee + REGISTRATION_FEE,
    }
}

impl AcquisitionCosts {
    /// Costs at the standard document fee rate
    pub fn standard(purchase_price: f64) -> Self {
        acquisition_costs(purchase_price, DEFAULT_DOCUMENT_FEE_RATE)
    }

    /// Fees paid on top of the price
    pub fn closing_costs(&self) -> f64 {
        self.document_fee + self.registration_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_costs() {
        let costs = AcquisitionCosts::standard(3_500_000.0);
        assert_eq!(costs.document_fee, 87_500.0);
        assert_eq!(costs.registration_fee, REGISTRATION_FEE);
        assert_eq!(costs.total, 3_500_000.0 + 87_500.0 + REGISTRATION_FEE);
        assert_eq!(costs.closing_costs(), 88_085.0);
    }

    #[test]
    fn test_custom_rate() {
        // Share-owned flats (borettslag) pay no document fee
        let costs = acquisition_costs(2_000_000.0, 0.0);
        assert_eq!(costs.document_fee, 0.0);
        assert_eq!(costs.total, 2_000_585.0);
    }
}
