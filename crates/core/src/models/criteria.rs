//! Property search criteria

use serde::{Deserialize, Serialize};

use super::property::{City, Property, PropertyType};
use crate::error::{Error, Result};

/// Optional constraints applied together when searching properties.
///
/// An unset field imposes no constraint. Zero is a real bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub city: Option<City>,
    pub property_type: Option<PropertyType>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Inclusive lower bound on bedrooms
    pub min_bedrooms: Option<u32>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn with_min_price(mut self, price: f64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn with_max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn with_min_bedrooms(mut self, bedrooms: u32) -> Self {
        self.min_bedrooms = Some(bedrooms);
        self
    }

    /// Does the property satisfy every supplied constraint?
    pub fn matches(&self, property: &Property) -> bool {
        self.city.map_or(true, |c| property.city == c)
            && self
                .property_type
                .map_or(true, |t| property.property_type == t)
            && self.min_price.map_or(true, |p| property.price >= p)
            && self.max_price.map_or(true, |p| property.price <= p)
            && self.min_bedrooms.map_or(true, |b| property.bedrooms >= b)
    }
}

/// Reject a price range whose lower bound exceeds its upper bound
pub fn validate_price_range(min: Option<f64>, max: Option<f64>) -> Result<()> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(Error::InvalidInput(
                "minimum price must be less than or equal to maximum price".into(),
            ));
        }
    }
    Ok(())
}
