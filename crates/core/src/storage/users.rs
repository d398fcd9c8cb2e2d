//! User store: username -> password digest

use std::collections::BTreeMap;
use std::path::Path;

use tracing::instrument;

use super::json;
use crate::error::{Error, Result};

/// Every registered user, keyed by username
pub type UserMap = BTreeMap<String, String>;

pub struct UserStore<'a> {
    path: &'a Path,
}

impl<'a> UserStore<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Load all users; a missing file means no users yet
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<UserMap> {
        json::read_or_default(self.path)
    }

    /// Replace the stored users
    #[instrument(skip(self, users), fields(count = users.len()))]
    pub fn save(&self, users: &UserMap) -> Result<()> {
        json::write(self.path, users)
    }

    /// Stored digest for a username
    pub fn find_digest(&self, username: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(username))
    }

    /// Add a user, refusing duplicates
    #[instrument(skip(self, digest))]
    pub fn create(&self, username: &str, digest: &str) -> Result<()> {
        let mut users = self.load()?;
        if users.contains_key(username) {
            return Err(Error::DuplicateUser(username.to_string()));
        }
        users.insert(username.to_string(), digest.to_string());
        self.save(&users)
    }
}
