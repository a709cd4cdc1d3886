//! Deployment profiles for the Coffee Shop frontend
//!
//! A profile names one of the two deployments the application ships with.
//! The active profile is fixed when the binary starts: `COFFEESHOP_PROFILE`
//! wins if set, otherwise the profile baked in at compile time applies.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::constants::{DEFAULT_PROFILE, PROFILE_ENV};
use crate::error::ConfigurationError;

/// Deployment profile selecting one of the built-in environment presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Local development with the backend and dev server on localhost
    #[default]
    Development,
    /// The deployed Coffee Shop service
    Production,
}

impl Profile {
    /// Check if this is the production profile
    pub fn is_production(&self) -> bool {
        matches!(self, Profile::Production)
    }

    /// Get profile as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }

    /// Resolve the active profile from the process environment
    ///
    /// Reads `COFFEESHOP_PROFILE` and falls back to the compile-time default.
    /// Unrecognized values are logged and ignored so that a bad deployment
    /// variable cannot take the application down.
    pub fn from_env() -> Self {
        match std::env::var(PROFILE_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!(
                    value = %value,
                    "Unrecognized {} value, using compiled default",
                    PROFILE_ENV
                );
                Self::compiled_default()
            }),
            Err(_) => Self::compiled_default(),
        }
    }

    // The build script rejects invalid profile names, so the parse cannot fail.
    fn compiled_default() -> Self {
        DEFAULT_PROFILE.parse().unwrap_or(Profile::Development)
    }
}

impl FromStr for Profile {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            _ => Err(ConfigurationError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_shorthand() {
        assert_eq!("development".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("dev".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("production".parse::<Profile>().unwrap(), Profile::Production);
        assert_eq!("prod".parse::<Profile>().unwrap(), Profile::Production);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Production".parse::<Profile>().unwrap(), Profile::Production);
        assert_eq!("DEV".parse::<Profile>().unwrap(), Profile::Development);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "staging".parse::<Profile>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_display_round_trips() {
        for profile in [Profile::Development, Profile::Production] {
            assert_eq!(profile.as_str().parse::<Profile>().unwrap(), profile);
        }
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(Profile::default(), Profile::Development);
        assert!(!Profile::default().is_production());
    }
}
