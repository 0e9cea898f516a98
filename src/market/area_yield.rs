//! Gross rental yield by area, used to estimate rent from a listing price

/// Gross yield assumed where no area entry matches (5%)
pub const DEFAULT_GROSS_YIELD: f64 = 0.050;

/// Ordered table of area name to gross annual yield (as a decimal)
///
/// Lookup returns the first area whose name appears in the city string, so
/// order matters when names overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaYieldTable {
    areas: Vec<(String, f64)>,
    default_yield: f64,
}

impl AreaYieldTable {
    /// Empty table that answers every lookup with `default_yield`
    pub fn new(default_yield: f64) -> Self {
        Self {
            areas: Vec::new(),
            default_yield,
        }
    }

    /// Estimated yields for the Oslo and Ringerike markets
    pub fn norway() -> Self {
        Self::new(DEFAULT_GROSS_YIELD)
            .with_area("Oslo", 0.046)
            .with_area("Ringerike", 0.054)
            .with_area("Hole", 0.050)
            // Town centre of Ringerike
            .with_area("Hønefoss", 0.054)
    }

    /// Append an area (builder style)
    pub fn with_area(mut self, area: impl Into<String>, gross_yield: f64) -> Self {
        self.push_area(area, gross_yield);
        self
    }

    /// Append an area, replacing an existing entry with the same name
    pub fn push_area(&mut self, area: impl Into<String>, gross_yield: f64) {
        let area = area.into();
        match self.areas.iter_mut().find(|(name, _)| *name == area) {
            Some(entry) => entry.1 = gross_yield,
            None => self.areas.push((area, gross_yield)),
        }
    }

    pub fn set_default_yield(&mut self, gross_yield: f64) {
        self.default_yield = gross_yield;
    }

    pub fn default_yield(&self) -> f64 {
        self.default_yield
    }

    pub fn areas(&self) -> &[(String, f64)] {
        &self.areas
    }

    /// Gross yield for a city
    pub fn yield_for(&self, city: Option<&str>) -> f64 {
        let city = match city {
            Some(c) if !c.is_empty() => c,
            _ => return self.default_yield,
        };

        self.areas
            .iter()
            .find(|(area, _)| city.contains(area.as_str()))
            .map(|(_, y)| *y)
            .unwrap_or(self.default_yield)
    }

    /// Monthly rent implied by the area yield, rounded to whole kroner
    pub fn estimate_monthly_rent(&self, price: f64, city: Option<&str>) -> f64 {
        if !price.is_finite() || price <= 0.0 {
            return 0.0;
        }
        (price * self.yield_for(city) / 12.0).round()
    }
}

impl Default for AreaYieldTable {
    fn default() -> Self {
        Self::norway()
    }
}
