//! Property listing model and its enumerated fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cities a property can be listed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "Québec")]
    Quebec,
    #[serde(rename = "Montréal")]
    Montreal,
    Toronto,
    Ottawa,
}

impl City {
    pub const ALL: &'static [City] = &[City::Quebec, City::Montreal, City::Toronto, City::Ottawa];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Quebec => "Québec",
            City::Montreal => "Montréal",
            City::Toronto => "Toronto",
            City::Ottawa => "Ottawa",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        City::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown city '{}', expected one of: {}",
                    s,
                    join(City::ALL)
                ))
            })
    }
}

/// Kinds of property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Maison,
    Appartement,
    Condo,
    Studio,
}

impl PropertyType {
    pub const ALL: &'static [PropertyType] = &[
        PropertyType::Maison,
        PropertyType::Appartement,
        PropertyType::Condo,
        PropertyType::Studio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Maison => "Maison",
            PropertyType::Appartement => "Appartement",
            PropertyType::Condo => "Condo",
            PropertyType::Studio => "Studio",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        PropertyType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown property type '{}', expected one of: {}",
                    s,
                    join(PropertyType::ALL)
                ))
            })
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A listed property
///
/// Older stores written with French keys (`prix`, `ville`, `chambres`,
/// `salles de bains`) are still readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(alias = "prix")]
    pub price: f64,
    #[serde(alias = "ville")]
    pub city: City,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(alias = "chambres")]
    pub bedrooms: u32,
    #[serde(alias = "salles de bains")]
    pub bathrooms: u32,
}

impl Property {
    /// Build a validated property
    pub fn new(
        price: f64,
        city: City,
        property_type: PropertyType,
        bedrooms: u32,
        bathrooms: u32,
    ) -> Result<Self> {
        let property = Self {
            price,
            city,
            property_type,
            bedrooms,
            bathrooms,
        };
        validate_property(&property)?;
        Ok(property)
    }
}

/// Domain rules every stored property must satisfy.
///
/// Enumerated fields are enforced by their types; the price must be a
/// finite, non-negative amount.
pub fn validate_property(property: &Property) -> Result<()> {
    validate_price(property.price)
}

/// Validate a single price value
pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(Error::InvalidInput(format!(
            "price must be a number, got {price}"
        )));
    }
    if price < 0.0 {
        return Err(Error::InvalidInput(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(())
}
