//! # Coffee Shop Config
//!
//! Deployment environment configuration shared by the Coffee Shop client
//! applications.
//!
//! ## Features
//!
//! - **Environment Record**: The exact settings the frontend reads at startup
//! - **Profiles**: Built-in development and production presets
//! - **Overrides**: Optional layering from `environment.toml` and `COFFEESHOP_*` variables
//! - **Auth0 Helpers**: Derived tenant URLs for the implicit login flow

pub mod constants;
pub mod environment;
pub mod error;
pub mod logging;
pub mod profile;

// Re-export commonly used types
pub use environment::{Auth0Config, Environment, ENVIRONMENT};
pub use error::{ConfigurationError, Result};
pub use profile::Profile;

/// Version of the coffeeshop-config crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
