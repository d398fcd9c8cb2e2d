//! Flat-file storage layer for DuProprio
//!
//! Three independent stores under one data directory: users (JSON object),
//! properties (JSON array) and the session slot (plain text). Every write
//! rewrites the whole file.

mod json;
mod properties;
mod session;
mod traits;
mod users;

use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::config::Config;
use crate::error::Result;
use crate::models::Property;

pub use properties::PropertyStore;
pub use session::SessionStore;
pub use traits::{PropertyRepository, Repository, SessionRepository, UserRepository};
pub use users::{UserMap, UserStore};

/// Main storage handle
#[derive(Debug, Clone)]
pub struct Storage {
    users_path: PathBuf,
    properties_path: PathBuf,
    session_path: PathBuf,
}

impl Storage {
    /// Open storage at the location described by `config`
    #[instrument(skip(config))]
    pub fn open(config: &Config) -> Result<Self> {
        let dir = config.resolve_data_dir()?;
        let storage = Self {
            users_path: dir.join(&config.users_file),
            properties_path: dir.join(&config.properties_file),
            session_path: dir.join(&config.session_file),
        };
        tracing::debug!(data_dir = %dir.display(), "Storage opened");
        Ok(storage)
    }

    /// Storage in `dir` with default file names
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let config = Config::default();
        let dir = dir.as_ref();
        Self {
            users_path: dir.join(config.users_file),
            properties_path: dir.join(config.properties_file),
            session_path: dir.join(config.session_file),
        }
    }

    /// Get user store
    pub fn users(&self) -> UserStore<'_> {
        UserStore::new(&self.users_path)
    }

    /// Get property store
    pub fn properties(&self) -> PropertyStore<'_> {
        PropertyStore::new(&self.properties_path)
    }

    /// Get session slot store
    pub fn session(&self) -> SessionStore<'_> {
        SessionStore::new(&self.session_path)
    }
}

impl UserRepository for Storage {
    fn find_digest(&self, username: &str) -> Result<Option<String>> {
        self.users().find_digest(username)
    }

    fn create_user(&self, username: &str, digest: &str) -> Result<()> {
        self.users().create(username, digest)
    }
}

impl PropertyRepository for Storage {
    fn load_properties(&self) -> Result<Vec<Property>> {
        self.properties().load()
    }

    fn save_properties(&self, properties: &[Property]) -> Result<()> {
        self.properties().save(properties)
    }

    fn append_property(&self, property: Property) -> Result<()> {
        self.properties().append(property)
    }
}

impl SessionRepository for Storage {
    fn load_session(&self) -> Result<Option<String>> {
        self.session().load()
    }

    fn save_session(&self, username: &str) -> Result<()> {
        self.session().save(username)
    }

    fn clear_session(&self) -> Result<()> {
        self.session().clear()
    }
}
