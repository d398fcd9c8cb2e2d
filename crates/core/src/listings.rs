//! Listing, filtering and adding properties

use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::models::{validate_property, FilterCriteria, Property, Session};
use crate::storage::PropertyRepository;

/// Every property in storage order
pub fn list_all<R: PropertyRepository + ?Sized>(repo: &R) -> Result<Vec<Property>> {
    repo.load_properties()
}

/// Properties matching all supplied criteria, in storage order
#[instrument(skip(repo))]
pub fn filter<R: PropertyRepository + ?Sized>(
    repo: &R,
    criteria: &FilterCriteria,
) -> Result<Vec<Property>> {
    Ok(filter_properties(&repo.load_properties()?, criteria))
}

/// In-memory form of [`filter`]
pub fn filter_properties(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Append a listing on behalf of the logged-in user
#[instrument(skip(repo, session, property), fields(user = ?session.current_user()))]
pub fn add_property<R: PropertyRepository + ?Sized>(
    repo: &R,
    session: &Session,
    property: Property,
) -> Result<()> {
    if !session.is_authenticated() {
        return Err(Error::NotAuthenticated);
    }
    validate_property(&property)?;
    repo.append_property(property)?;
    info!("Property added");
    Ok(())
}
