//! Portal - the service object front ends talk to
//!
//! Owns the repository and the process's login session. The session slot on
//! disk is read once when the portal opens and written through on every
//! login/logout.

use tracing::debug;

use crate::accounts;
use crate::config::Config;
use crate::error::Result;
use crate::listings;
use crate::models::{FilterCriteria, Property, Session};
use crate::storage::{Repository, Storage};

pub struct Portal<R = Storage> {
    repo: R,
    session: Session,
}

impl Portal<Storage> {
    /// Open file storage described by `config` and restore the session
    pub fn open(config: &Config) -> Result<Self> {
        Self::with_repository(Storage::open(config)?)
    }
}

impl<R: Repository> Portal<R> {
    pub fn with_repository(repo: R) -> Result<Self> {
        let session = accounts::restore_session(&repo)?;
        debug!(user = ?session.current_user(), "Portal ready");
        Ok(Self { repo, session })
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        accounts::register(&self.repo, username, password)
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        accounts::login(&self.repo, &mut self.session, username, password)
    }

    pub fn logout(&mut self) -> Result<()> {
        accounts::logout(&self.repo, &mut self.session)
    }

    pub fn current_user(&self) -> Option<&str> {
        self.session.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn list_all(&self) -> Result<Vec<Property>> {
        listings::list_all(&self.repo)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<Property>> {
        listings::filter(&self.repo, criteria)
    }

    pub fn add_property(&self, property: Property) -> Result<()> {
        listings::add_property(&self.repo, &self.session, property)
    }
}
