//! # JwtKeeper Core
//!
//! Core domain layer for the jwt-keeper library.
//! This crate contains the token lifecycle service, the revocation record
//! entity and repository contract, and the error types shared with the
//! infrastructure layer.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
