//! Deployment constants for the Coffee Shop frontend
//!
//! The Auth0 tenant values are pre-compiled into the binary by the build
//! script and can be overridden with `COFFEESHOP_*` variables at build time.
//! The per-profile URLs below are fixed properties of the two deployments.

// Include the generated compile-time constants
include!(concat!(env!("OUT_DIR"), "/build_constants.rs"));

/// Base URL of the drinks API for the deployed service
pub const API_SERVER_URL: &str = "https://coffee-shop.test";

/// Base URL of the drinks API when the backend runs locally
pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 redirect target for the deployed frontend
pub const CALLBACK_URL: &str = "https://coffee-shop.test";

/// Auth0 redirect target for the local Ionic dev server
pub const DEV_CALLBACK_URL: &str = "http://localhost:8100";

/// Override file consulted when no explicit path is given to
/// [`Environment::load`](crate::Environment::load)
pub const ENVIRONMENT_FILE: &str = "environment.toml";

/// Prefix shared by all runtime environment variable overrides
pub const ENV_PREFIX: &str = "COFFEESHOP_";

/// Environment variable selecting the active profile at runtime
pub const PROFILE_ENV: &str = "COFFEESHOP_PROFILE";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Profile;

    #[test]
    fn test_baked_tenant_values_are_present() {
        assert!(!AUTH0_DOMAIN.is_empty());
        assert!(!AUTH0_AUDIENCE.is_empty());
        assert!(!AUTH0_CLIENT_ID.is_empty());
    }

    #[test]
    fn test_baked_issuer_is_a_tenant_url() {
        assert!(AUTH0_ISSUER.starts_with("https://"));
        assert!(AUTH0_ISSUER.ends_with('/'));
    }

    #[test]
    fn test_baked_default_profile_parses() {
        DEFAULT_PROFILE.parse::<Profile>().unwrap();
    }

    #[test]
    fn test_per_profile_urls_have_schemes() {
        for url in [API_SERVER_URL, DEV_API_SERVER_URL, CALLBACK_URL, DEV_CALLBACK_URL] {
            assert!(url.starts_with("http://") || url.starts_with("https://"));
            assert!(!url.ends_with('/'));
        }
    }
}
