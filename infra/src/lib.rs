//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for jwt-keeper. It provides
//! the concrete MySQL revocation store behind the `jk_core` repository trait,
//! plus connection-pool management and environment-driven configuration.
//!
//! ## Architecture
//!
//! - **Database**: MySQL implementation using SQLx
//! - **Configuration**: env-variable driven, loaded through `dotenvy`
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use jk_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration module for infrastructure services
pub mod config;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
