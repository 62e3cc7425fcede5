//! Token service module for JWT lifecycle management
//!
//! This module handles all token-related operations including:
//! - JWT signing and verification against an allowlist store
//! - Unverified decoding for inspection
//! - Record destruction and opportunistic cleanup of expired records
//! - Random token identifier generation

mod config;
mod id;
mod jwt;
mod keys;
mod options;
mod service;

#[cfg(test)]
mod tests;

pub use config::{TokenServiceConfig, DEFAULT_KEY_PREFIX};
pub use id::{generate_id, DEFAULT_JTI_LENGTH};
pub use options::TokenOptions;
pub use service::TokenService;
