//! Market assumptions: area yields, listings and rent estimates

mod area_yield;
mod listing;
mod rent_stats;
pub mod loader;

pub use area_yield::{AreaYieldTable, DEFAULT_GROSS_YIELD};
pub use listing::{PropertyListing, PropertyType};
pub use rent_stats::{BedroomBucket, BedroomRent, RentStats, TypeRent};
pub use loader::{load_area_yields, load_listings, load_listings_from_reader};

use crate::analysis::AnalysisInput;
use crate::error::AnalysisError;
use std::path::Path;

/// File name of the optional default analysis input inside an assumptions directory
pub const DEFAULT_INPUT_FILE: &str = "default_input.json";

/// Container for everything needed to analyze listings
#[derive(Debug, Clone, PartialEq)]
pub struct MarketAssumptions {
    /// Gross yields used to estimate rent from price
    pub yields: AreaYieldTable,

    /// Financing, cost and tax parameters applied to each listing
    pub default_input: AnalysisInput,
}

impl MarketAssumptions {
    /// Built-in Norwegian assumptions with the calculator's running costs
    pub fn default_norway() -> Self {
        Self {
            yields: AreaYieldTable::norway(),
            default_input: AnalysisInput {
                purchase_price: 0.0,
                monthly_rent: 0.0,
                ..AnalysisInput::dashboard_example()
            },
        }
    }

    /// Load assumptions from the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, AnalysisError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from a directory
    ///
    /// `area_yields.csv` is required; `default_input.json` is optional and
    /// falls back to the built-in running costs.
    pub fn from_csv_path(path: &Path) -> Result<Self, AnalysisError> {
        let yields = load_area_yields(path.join(loader::AREA_YIELDS_FILE))?;

        let input_path = path.join(DEFAULT_INPUT_FILE);
        let default_input = if input_path.exists() {
            AnalysisInput::from_json_path(&input_path)?
        } else {
            log::debug!("{} not found, using built-in defaults", input_path.display());
            Self::default_norway().default_input
        };

        Ok(Self {
            yields,
            default_input,
        })
    }

    /// Analysis input for a listing: defaults plus its price and estimated rent
    pub fn input_for(&self, listing: &PropertyListing) -> AnalysisInput {
        AnalysisInput {
            purchase_price: listing.price,
            monthly_rent: self
                .yields
                .estimate_monthly_rent(listing.price, listing.city.as_deref()),
            ..self.default_input
        }
    }

    /// Rent statistics over listings using these yields
    pub fn rent_stats(&self, listings: &[PropertyListing]) -> Option<RentStats> {
        RentStats::compute(listings, &self.yields)
    }
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self::default_norway()
    }
}
