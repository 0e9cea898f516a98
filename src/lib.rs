//! Rental Analysis - Investment calculator for Norwegian rental property
//!
//! This library provides:
//! - Annuity mortgage payments and amortization schedules
//! - Vacancy-adjusted rental income, operating costs and capital income tax
//! - Cash flow, gross/net yield and cash-on-cash return
//! - Acquisition costs (document fee, registration fee)
//! - Rent estimation and rent statistics from listing prices
//! - Batch and sensitivity runs over many properties

pub mod analysis;
pub mod error;
pub mod format;
pub mod market;
pub mod scenario;

// Re-export commonly used types
pub use analysis::{analyze, AmortizationSchedule, AnalysisInput, AnalysisResult};
pub use error::AnalysisError;
pub use format::{format_nok, CurrencyFormat, Locale};
pub use market::{AreaYieldTable, MarketAssumptions, PropertyListing, RentStats};
pub use scenario::{ListingAnalysis, ScenarioRunner};
