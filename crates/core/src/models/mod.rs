//! Data models for DuProprio

mod criteria;
mod property;
mod session;

pub use criteria::*;
pub use property::*;
pub use session::*;
