//! Storage repository traits
//!
//! These traits define the storage interface, allowing for different
//! implementations (JSON files, in-memory mocks).

use crate::error::Result;
use crate::models::Property;

/// User repository operations
pub trait UserRepository {
    /// Stored digest for a username
    fn find_digest(&self, username: &str) -> Result<Option<String>>;

    /// Create a user; fails with `DuplicateUser` if the name is taken
    fn create_user(&self, username: &str, digest: &str) -> Result<()>;
}

/// Property repository operations
pub trait PropertyRepository {
    /// Load every property in insertion order
    fn load_properties(&self) -> Result<Vec<Property>>;

    /// Replace every property
    fn save_properties(&self, properties: &[Property]) -> Result<()>;

    /// Append one property
    fn append_property(&self, property: Property) -> Result<()>;
}

/// Session slot operations
pub trait SessionRepository {
    /// Username held in the slot, if any
    fn load_session(&self) -> Result<Option<String>>;

    /// Put a username in the slot
    fn save_session(&self, username: &str) -> Result<()>;

    /// Empty the slot
    fn clear_session(&self) -> Result<()>;
}

/// Combined storage interface
pub trait Repository: UserRepository + PropertyRepository + SessionRepository {}

// Blanket implementation: any type implementing all traits implements Repository
impl<T> Repository for T where T: UserRepository + PropertyRepository + SessionRepository {}
