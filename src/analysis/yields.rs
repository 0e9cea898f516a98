//! Yield and return ratios
//!
//! All ratios are returned as percentages and fall back to 0 when the
//! denominator is not positive.

/// Gross rent as a share of the purchase price (brutto yield)
pub fn gross_yield(gross_annual_rent: f64, purchase_price: f64) -> f64 {
    percent_of(gross_annual_rent, purchase_price)
}

/// Rent after vacancy and operating costs as a share of the price (netto yield)
pub fn net_yield(effective_annual_rent: f64, total_operating_costs: f64, purchase_price: f64) -> f64 {
    percent_of(effective_annual_rent - total_operating_costs, purchase_price)
}

/// After-tax cash flow as a share of the equity put in
pub fn cash_on_cash(annual_cash_flow_after_tax: f64, down_payment: f64) -> f64 {
    percent_of(annual_cash_flow_after_tax, down_payment)
}

fn percent_of(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    numerator / denominator * 100.0
}
