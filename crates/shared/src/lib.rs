//! Shared types, errors, and configuration for Tillbook.
//!
//! This crate provides common types used across all other crates:
//! - The positive `Amount` type with decimal precision
//! - Typed IDs for type-safe entity references
//! - Session roles and JWT claims
//! - Token signing and validation
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::{Claims, Role};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{IssuedToken, JwtConfig, JwtError, JwtService};
