//! DuProprio Core Library
//!
//! Accounts, sessions, property listings and their flat-file storage.

pub mod accounts;
pub mod config;
pub mod error;
pub mod hashing;
pub mod listings;
pub mod models;
pub mod money;
pub mod portal;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use hashing::{hash_password, verify_password};
pub use models::*;
pub use money::format_money;
pub use portal::Portal;
pub use storage::{
    PropertyRepository, PropertyStore, Repository, SessionRepository, SessionStore, Storage,
    UserMap, UserRepository, UserStore,
};
