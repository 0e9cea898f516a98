//! CSV loaders for listings and area yields

use super::area_yield::{AreaYieldTable, DEFAULT_GROSS_YIELD};
use super::listing::PropertyListing;
use crate::error::AnalysisError;
use csv::Reader;
use std::fs::File;
use std::path::Path;

/// Default path to the market assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File name of the area yield table inside an assumptions directory
pub const AREA_YIELDS_FILE: &str = "area_yields.csv";

/// Area name that sets the table's fallback yield
const DEFAULT_AREA: &str = "Default";

/// Raw CSV row of a listing export
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ListingRow {
    id: String,
    title: String,
    city: Option<String>,
    price: Option<f64>,
    price_total: Option<f64>,
    sqm: Option<f64>,
    bedrooms: Option<u32>,
    property_type: Option<String>,
}

impl ListingRow {
    fn into_listing(self) -> PropertyListing {
        // Asking price first, total price (incl. shared debt) as fallback
        let price = [self.price, self.price_total]
            .into_iter()
            .flatten()
            .find(|p| p.is_finite() && *p != 0.0)
            .unwrap_or(0.0);

        PropertyListing {
            id: self.id,
            title: self.title,
            city: self.city.filter(|c| !c.trim().is_empty()),
            price,
            sqm: self.sqm,
            bedrooms: self.bedrooms,
            property_type: self.property_type.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct AreaYieldRow {
    area: String,
    gross_yield: f64,
}

/// Load listings from a CSV file
pub fn load_listings<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyListing>, AnalysisError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_listings_from_reader(file)
}

/// Load listings from any reader (e.g., string buffer, network stream)
pub fn load_listings_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<PropertyListing>, AnalysisError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut listings = Vec::new();

    for result in csv_reader.deserialize() {
        let row: ListingRow = result?;
        listings.push(row.into_listing());
    }

    log::debug!("loaded {} listings", listings.len());
    Ok(listings)
}

/// Load an area yield table from a CSV file with `area,gross_yield` columns
pub fn load_area_yields<P: AsRef<Path>>(path: P) -> Result<AreaYieldTable, AnalysisError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_area_yields_from_reader(file)
}

/// Load an area yield table from any reader
///
/// Yields are decimals (0.046 for 4.6%). A row named `Default` sets the
/// fallback yield; otherwise 5% is used.
pub fn load_area_yields_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<AreaYieldTable, AnalysisError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut table = AreaYieldTable::new(DEFAULT_GROSS_YIELD);

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: AreaYieldRow = result?;
        // Header is line 1
        let line = idx as u64 + 2;

        if !row.gross_yield.is_finite() || row.gross_yield < 0.0 {
            return Err(AnalysisError::invalid_record(
                line,
                format!("gross yield for {} must be a non-negative number", row.area),
            ));
        }
        if row.gross_yield > 1.0 {
            log::warn!(
                "line {}: gross yield {} for {} looks like a percentage, expected a decimal",
                line,
                row.gross_yield,
                row.area
            );
        }

        let area = row.area.trim();
        if area.is_empty() {
            log::warn!("line {}: skipping row without area name", line);
            continue;
        }

        if area == DEFAULT_AREA {
            table.set_default_yield(row.gross_yield);
        } else {
            table.push_area(area, row.gross_yield);
        }
    }

    log::debug!("loaded {} area yields", table.areas().len());
    Ok(table)
}
