//! Error types for DuProprio Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Username already taken: {0}")]
    DuplicateUser(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("You must be logged in to do this")]
    NotAuthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
