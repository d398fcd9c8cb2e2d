//! Property store: ordered, append-only list of listings

use std::path::Path;

use tracing::instrument;

use super::json;
use crate::error::Result;
use crate::models::Property;

pub struct PropertyStore<'a> {
    path: &'a Path,
}

impl<'a> PropertyStore<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Load every property in insertion order
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<Property>> {
        json::read_or_default(self.path)
    }

    /// Replace the stored properties
    #[instrument(skip(self, properties), fields(count = properties.len()))]
    pub fn save(&self, properties: &[Property]) -> Result<()> {
        json::write(self.path, properties)
    }

    /// Load, push and save. Last writer wins if two processes race.
    #[instrument(skip(self, property), fields(city = %property.city))]
    pub fn append(&self, property: Property) -> Result<()> {
        let mut properties = self.load()?;
        properties.push(property);
        self.save(&properties)
    }
}
