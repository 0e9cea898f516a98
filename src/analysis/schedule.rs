//! Month-by-month amortization schedule for an annuity loan
//!
//! The analysis itself deducts interest on the opening balance for the whole
//! first year. The schedule tracks the balance as it is paid down and is the
//! place to look for later-year interest and remaining debt.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::input::AnalysisInput;
use super::mortgage::{monthly_payment, monthly_rate, PAYMENTS_PER_YEAR};

/// Longest schedule built (100 years of monthly payments)
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// A single monthly payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    /// Payment number (1-indexed)
    pub month: u32,

    /// Loan year the payment falls in (1-indexed)
    pub year: u32,

    /// Due date, if the schedule was anchored to a first payment date
    pub payment_date: Option<NaiveDate>,

    pub opening_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Interest and principal paid over one loan year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationYear {
    pub year: u32,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Complete amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationSchedule {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub monthly_payment: f64,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Build the schedule for a loan
    ///
    /// Loans with no principal or no term produce an empty schedule. Terms
    /// longer than `MAX_SCHEDULE_MONTHS` are cut off there and the last row
    /// repays the outstanding balance.
    pub fn build(principal: f64, annual_rate_percent: f64, years: f64) -> Self {
        Self::build_dated(principal, annual_rate_percent, years, None)
    }

    /// Build the schedule for the loan implied by an analysis input
    pub fn build_from(input: &AnalysisInput) -> Self {
        Self::build(input.loan_amount(), input.interest_rate, input.loan_term_years)
    }

    /// Build the schedule with payment dates starting at `first_payment`
    pub fn build_dated(
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
        first_payment: Option<NaiveDate>,
    ) -> Self {
        let payment = monthly_payment(principal, annual_rate_percent, years);
        let mut schedule = Self {
            principal,
            annual_rate_percent,
            monthly_payment: payment,
            rows: Vec::new(),
        };

        if !payment.is_finite() || payment <= 0.0 {
            return schedule;
        }

        let rate = if annual_rate_percent > 0.0 {
            monthly_rate(annual_rate_percent)
        } else {
            0.0
        };
        let num_payments = (years * PAYMENTS_PER_YEAR)
            .round()
            .clamp(1.0, MAX_SCHEDULE_MONTHS as f64) as u32;
        schedule.rows.reserve(num_payments as usize);

        let mut balance = principal;
        for month in 1..=num_payments {
            let interest = balance * rate;
            // Last payment clears whatever rounding left behind
            let principal_paid = if month == num_payments {
                balance
            } else {
                (payment - interest).min(balance)
            };
            let closing_balance = balance - principal_paid;

            schedule.rows.push(AmortizationRow {
                month,
                year: (month - 1) / 12 + 1,
                payment_date: first_payment
                    .and_then(|date| date.checked_add_months(Months::new(month - 1))),
                opening_balance: balance,
                payment: interest + principal_paid,
                interest,
                principal: principal_paid,
                closing_balance,
            });

            balance = closing_balance;
        }

        schedule
    }

    /// Per-year totals
    pub fn yearly(&self) -> Vec<AmortizationYear> {
        let mut years: Vec<AmortizationYear> = Vec::new();

        for row in &self.rows {
            match years.last_mut() {
                Some(current) if current.year == row.year => {
                    current.interest += row.interest;
                    current.principal += row.principal;
                    current.closing_balance = row.closing_balance;
                }
                _ => years.push(AmortizationYear {
                    year: row.year,
                    interest: row.interest,
                    principal: row.principal,
                    closing_balance: row.closing_balance,
                }),
            }
        }

        years
    }

    /// Interest paid over the life of the loan
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    /// All payments over the life of the loan
    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }

    /// Balance outstanding after `months` payments
    pub fn balance_after(&self, months: u32) -> f64 {
        if months == 0 {
            return self.principal.max(0.0);
        }
        self.rows
            .get(months as usize - 1)
            .or(self.rows.last())
            .map(|r| r.closing_balance)
            .unwrap_or(0.0)
    }
}
