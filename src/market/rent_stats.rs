//! Estimated rent statistics over a set of listings

use serde::{Deserialize, Serialize};

use super::area_yield::AreaYieldTable;
use super::listing::{PropertyListing, PropertyType};

/// Bedroom count bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BedroomBucket {
    One,
    Two,
    Three,
    FourPlus,
}

impl BedroomBucket {
    pub const ALL: [BedroomBucket; 4] = [
        BedroomBucket::One,
        BedroomBucket::Two,
        BedroomBucket::Three,
        BedroomBucket::FourPlus,
    ];

    /// Bucket for a bedroom count; unknown (0) is not bucketed
    pub fn from_count(bedrooms: u32) -> Option<Self> {
        match bedrooms {
            0 => None,
            1 => Some(BedroomBucket::One),
            2 => Some(BedroomBucket::Two),
            3 => Some(BedroomBucket::Three),
            _ => Some(BedroomBucket::FourPlus),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BedroomBucket::One => "1 soverom",
            BedroomBucket::Two => "2 soverom",
            BedroomBucket::Three => "3 soverom",
            BedroomBucket::FourPlus => "4+ soverom",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BedroomRent {
    pub bucket: BedroomBucket,
    pub count: usize,
    /// Average estimated monthly rent (0 when no listings fall in the bucket)
    pub average_rent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeRent {
    pub property_type: PropertyType,
    pub count: usize,
    pub total_rent: f64,
}

impl TypeRent {
    pub fn average_rent(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_rent / self.count as f64
        }
    }
}

/// Rent estimates aggregated over listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentStats {
    /// Average estimated monthly rent per m² over listings with a known area
    pub per_sqm: f64,
    pub by_bedrooms: Vec<BedroomRent>,
    pub by_type: Vec<TypeRent>,
}

impl RentStats {
    /// Aggregate estimated rents; `None` when there are no listings at all
    ///
    /// Listings without a price contribute nothing.
    pub fn compute(listings: &[PropertyListing], yields: &AreaYieldTable) -> Option<Self> {
        if listings.is_empty() {
            return None;
        }

        let mut per_sqm_total = 0.0;
        let mut per_sqm_count = 0usize;
        let mut bedroom_sums = [(0.0_f64, 0usize); 4];
        let mut by_type: Vec<TypeRent> = PropertyType::ALL
            .into_iter()
            .map(|property_type| TypeRent {
                property_type,
                count: 0,
                total_rent: 0.0,
            })
            .collect();

        for listing in listings.iter().filter(|l| l.price > 0.0) {
            let rent = yields.estimate_monthly_rent(listing.price, listing.city.as_deref());

            if let Some(sqm) = listing.sqm.filter(|s| *s > 0.0) {
                per_sqm_total += rent / sqm;
                per_sqm_count += 1;
            }

            if let Some(bucket) = BedroomBucket::from_count(listing.bedrooms.unwrap_or(0)) {
                let slot = &mut bedroom_sums[bucket.index()];
                slot.0 += rent;
                slot.1 += 1;
            }

            if let Some(kind) = listing.property_type.as_deref().and_then(PropertyType::classify) {
                if let Some(entry) = by_type.iter_mut().find(|t| t.property_type == kind) {
                    entry.total_rent += rent;
                    entry.count += 1;
                }
            }
        }

        let per_sqm = if per_sqm_count > 0 {
            per_sqm_total / per_sqm_count as f64
        } else {
            0.0
        };

        let by_bedrooms = BedroomBucket::ALL
            .into_iter()
            .map(|bucket| {
                let (sum, count) = bedroom_sums[bucket.index()];
                BedroomRent {
                    bucket,
                    count,
                    average_rent: if count > 0 { sum / count as f64 } else { 0.0 },
                }
            })
            .collect();

        Some(Self {
            per_sqm,
            by_bedrooms,
            by_type,
        })
    }

    pub fn bedroom(&self, bucket: BedroomBucket) -> Option<&BedroomRent> {
        self.by_bedrooms.iter().find(|b| b.bucket == bucket)
    }

    pub fn property_type(&self, property_type: PropertyType) -> Option<&TypeRent> {
        self.by_type.iter().find(|t| t.property_type == property_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listings() -> Vec<PropertyListing> {
        vec![
            // 4.6M * 4.6% / 12 = 17 633
            PropertyListing::new("a", 4_600_000.0)
                .with_city("Oslo")
                .with_sqm(50.0)
                .with_bedrooms(2)
                .with_property_type("Leilighet"),
            // 3M * 5.4% / 12 = 13 500
            PropertyListing::new("b", 3_000_000.0)
                .with_city("Hønefoss")
                .with_sqm(100.0)
                .with_bedrooms(2)
                .with_property_type("Selveier leilighet"),
            // 6M * 5% / 12 = 25 000
            PropertyListing::new("c", 6_000_000.0)
                .with_city("Bergen")
                .with_bedrooms(5)
                .with_property_type("Enebolig"),
            // Unknown bedrooms, no sqm
            PropertyListing::new("d", 2_400_000.0).with_property_type("Tomt"),
            // No price: ignored entirely
            PropertyListing::new("e", 0.0)
                .with_city("Oslo")
                .with_sqm(40.0)
                .with_bedrooms(1)
                .with_property_type("Rekkehus"),
        ]
    }

    #[test]
    fn test_empty_is_none() {
        assert!(RentStats::compute(&[], &AreaYieldTable::norway()).is_none());
    }

    #[test]
    fn test_per_sqm_average() {
        let stats = RentStats::compute(&listings(), &AreaYieldTable::norway()).unwrap();
        let expected = (17_633.0 / 50.0 + 13_500.0 / 100.0) / 2.0;
        assert!((stats.per_sqm - expected).abs() < 1e-9, "got {}", stats.per_sqm);
    }

    #[test]
    fn test_bedroom_buckets() {
        let stats = RentStats::compute(&listings(), &AreaYieldTable::norway()).unwrap();
        assert_eq!(stats.by_bedrooms.len(), 4);

        let two = stats.bedroom(BedroomBucket::Two).unwrap();
        assert_eq!(two.count, 2);
        assert_eq!(two.average_rent, (17_633.0 + 13_500.0) / 2.0);

        let four_plus = stats.bedroom(BedroomBucket::FourPlus).unwrap();
        assert_eq!(four_plus.count, 1);
        assert_eq!(four_plus.average_rent, 25_000.0);

        // Listing "e" has no price, so the one-bedroom bucket stays empty
        let one = stats.bedroom(BedroomBucket::One).unwrap();
        assert_eq!(one.count, 0);
        assert_eq!(one.average_rent, 0.0);
        assert_eq!(BedroomBucket::FourPlus.label(), "4+ soverom");
    }

    #[test]
    fn test_property_types() {
        let stats = RentStats::compute(&listings(), &AreaYieldTable::norway()).unwrap();

        let flats = stats.property_type(PropertyType::Leilighet).unwrap();
        assert_eq!(flats.count, 2);
        assert_eq!(flats.total_rent, 31_133.0);
        assert_eq!(flats.average_rent(), 15_566.5);

        let houses = stats.property_type(PropertyType::Enebolig).unwrap();
        assert_eq!(houses.count, 1);

        let terraced = stats.property_type(PropertyType::Rekkehus).unwrap();
        assert_eq!(terraced.count, 0);
        assert_eq!(terraced.average_rent(), 0.0);
    }

    #[test]
    fn test_unpriced_listings_give_zeroed_stats() {
        let listings = vec![PropertyListing::new("x", 0.0).with_sqm(50.0)];
        let stats = RentStats::compute(&listings, &AreaYieldTable::norway()).unwrap();
        assert_eq!(stats.per_sqm, 0.0);
        assert!(stats.by_bedrooms.iter().all(|b| b.count == 0));
    }
}
