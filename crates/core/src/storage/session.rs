//! Session slot: a single username in a text file, empty when logged out

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::instrument;

use super::json::ensure_parent;
use crate::error::Result;

pub struct SessionStore<'a> {
    path: &'a Path,
}

impl<'a> SessionStore<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Username in the slot, if any
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.path) {
            Ok(content) => {
                let username = content.trim();
                Ok((!username.is_empty()).then(|| username.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub fn save(&self, username: &str) -> Result<()> {
        ensure_parent(self.path)?;
        fs::write(self.path, username)?;
        Ok(())
    }

    /// Empty the slot
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<()> {
        ensure_parent(self.path)?;
        fs::write(self.path, "")?;
        Ok(())
    }
}
