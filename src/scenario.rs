//! Scenario runner for batch analyses
//!
//! Loads market assumptions once, then analyzes many inputs or listings
//! without re-reading the assumption files.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, AnalysisInput, AnalysisResult};
use crate::error::AnalysisError;
use crate::market::{MarketAssumptions, PropertyListing, RentStats};

/// Analysis of one listing at its estimated rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingAnalysis {
    pub listing_id: String,
    pub estimated_monthly_rent: f64,
    pub analysis: AnalysisResult,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// // What does the flat look like at different rates?
/// let results = runner.run_rate_sweep(&input, &[4.5, 5.5, 6.5]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    market: MarketAssumptions,
}

impl ScenarioRunner {
    /// Create runner with the built-in Norwegian assumptions
    pub fn new() -> Self {
        Self {
            market: MarketAssumptions::default_norway(),
        }
    }

    /// Create runner by loading assumptions from the default directory
    pub fn from_csv() -> Result<Self, AnalysisError> {
        Ok(Self {
            market: MarketAssumptions::from_csv()?,
        })
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, AnalysisError> {
        Ok(Self {
            market: MarketAssumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(market: MarketAssumptions) -> Self {
        Self { market }
    }

    /// Analyze a single input
    pub fn run(&self, input: &AnalysisInput) -> AnalysisResult {
        analyze(input)
    }

    /// Analyze many inputs in parallel, preserving order
    pub fn run_batch(&self, inputs: &[AnalysisInput]) -> Vec<AnalysisResult> {
        log::debug!("analyzing batch of {} inputs", inputs.len());
        inputs.par_iter().map(analyze).collect()
    }

    /// Analyze every listing at its area-estimated rent, preserving order
    pub fn run_listings(&self, listings: &[PropertyListing]) -> Vec<ListingAnalysis> {
        log::debug!("analyzing {} listings", listings.len());
        listings
            .par_iter()
            .map(|listing| {
                let input = self.market.input_for(listing);
                ListingAnalysis {
                    listing_id: listing.id.clone(),
                    estimated_monthly_rent: input.monthly_rent,
                    analysis: analyze(&input),
                }
            })
            .collect()
    }

    /// Analyze the same property at each interest rate
    pub fn run_rate_sweep(&self, input: &AnalysisInput, rates: &[f64]) -> Vec<AnalysisResult> {
        rates
            .iter()
            .map(|&rate| {
                analyze(&AnalysisInput {
                    interest_rate: rate,
                    ..*input
                })
            })
            .collect()
    }

    /// Rent statistics over listings
    pub fn rent_stats(&self, listings: &[PropertyListing]) -> Option<RentStats> {
        self.market.rent_stats(listings)
    }

    /// Get reference to the market assumptions
    pub fn assumptions(&self) -> &MarketAssumptions {
        &self.market
    }

    /// Get mutable reference to the market assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut MarketAssumptions {
        &mut self.market
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_sweep() {
        let runner = ScenarioRunner::new();
        let input = AnalysisInput::dashboard_example();

        let results = runner.run_rate_sweep(&input, &[0.0, 4.0, 5.5, 7.0]);
        assert_eq!(results.len(), 4);

        // Higher rates cost more every month
        for pair in results.windows(2) {
            assert!(pair[1].loan.monthly_mortgage > pair[0].loan.monthly_mortgage);
            assert!(pair[1].summary.annual_cash_flow < pair[0].summary.annual_cash_flow);
        }
        assert_eq!(results[2], runner.run(&input));
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<_> = (1..=50)
            .map(|i| AnalysisInput {
                purchase_price: 1_000_000.0 * i as f64,
                ..AnalysisInput::dashboard_example()
            })
            .collect();

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 50);
        for (input, result) in inputs.iter().zip(&results) {
            assert_eq!(result.loan.purchase_price, input.purchase_price);
            assert_eq!(*result, analyze(input));
        }
    }

    #[test]
    fn test_listings_use_estimated_rent() {
        let runner = ScenarioRunner::new();
        let listings = vec![
            PropertyListing::new("oslo", 4_600_000.0).with_city("Oslo"),
            PropertyListing::new("unpriced", 0.0).with_city("Oslo"),
        ];

        let results = runner.run_listings(&listings);
        assert_eq!(results[0].listing_id, "oslo");
        assert_eq!(results[0].estimated_monthly_rent, 17_633.0);
        assert_eq!(results[0].analysis.income.monthly_rent, 17_633.0);
        assert_eq!(results[0].analysis.costs.total_operating_costs, 51_000.0);

        assert_eq!(results[1].estimated_monthly_rent, 0.0);
        assert_eq!(results[1].analysis.summary.gross_yield, 0.0);
    }

    #[test]
    fn test_custom_assumptions() {
        let mut runner = ScenarioRunner::new();
        runner.assumptions_mut().default_input.interest_rate = 0.0;
        let results = runner.run_listings(&[PropertyListing::new("1", 2_000_000.0)]);
        assert_eq!(results[0].analysis.loan.annual_interest, 0.0);
    }
}
