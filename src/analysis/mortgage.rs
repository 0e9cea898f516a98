//! Fixed-rate annuity mortgage payments

/// Number of payments per year for a Norwegian annuity loan
pub const PAYMENTS_PER_YEAR: f64 = 12.0;

/// Calculate the monthly payment of a fixed-rate annuity loan
///
/// # Arguments
/// * `principal` - Loan amount in NOK
/// * `annual_rate_percent` - Annual interest rate as a percentage (e.g., 5.5)
/// * `years` - Loan term in years
///
/// # Returns
/// * Monthly payment. Degenerate loans (no principal, no term) pay 0 and a
///   zero or negative rate amortizes straight-line.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, years: f64) -> f64 {
    if principal <= 0.0 || years <= 0.0 {
        return 0.0;
    }

    let num_payments = years * PAYMENTS_PER_YEAR;

    if annual_rate_percent <= 0.0 {
        return principal / num_payments;
    }

    let monthly_rate = monthly_rate(annual_rate_percent);
    let growth = (1.0 + monthly_rate).powf(num_payments);

    // Compounding overflows on very long terms; the payment tends to interest only
    if growth.is_infinite() {
        return principal * monthly_rate;
    }

    principal * monthly_rate * growth / (growth - 1.0)
}

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / PAYMENTS_PER_YEAR
}

/// First-year interest using the opening balance for the whole year
///
/// This is the flat approximation the analysis deducts for tax. It ignores
/// principal paydown during the year; see `AmortizationSchedule` for the
/// month-by-month figure.
pub fn first_year_interest(loan_amount: f64, annual_rate_percent: f64) -> f64 {
    loan_amount * (annual_rate_percent / 100.0)
}
