//! Environment configuration for the Coffee Shop client applications
//!
//! The [`Environment`] record carries every deployment-dependent value the
//! frontend needs: whether the build targets the deployed service, where the
//! drinks API lives, and the Auth0 tenant settings for login. It is resolved
//! once when the process starts and never changes afterwards; application
//! code reads [`ENVIRONMENT`] instead of carrying its own copy.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use url::Url;

use crate::constants::{
    API_SERVER_URL, AUTH0_AUDIENCE, AUTH0_CLIENT_ID, AUTH0_DOMAIN, CALLBACK_URL,
    DEV_API_SERVER_URL, DEV_CALLBACK_URL, ENVIRONMENT_FILE, ENV_PREFIX,
};
use crate::error::{ConfigurationError, Result};
use crate::profile::Profile;

/// The environment the running process was deployed with
///
/// Resolved on first access from the active profile's preset and fixed for
/// the lifetime of the process. Resolution never touches the filesystem, so
/// reading this static cannot fail.
pub static ENVIRONMENT: Lazy<Environment> =
    Lazy::new(|| Environment::for_profile(Profile::from_env()));

/// Auth0 tenant settings for the frontend login flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auth0Config {
    /// Tenant domain, as a bare domain or an https origin
    pub url: String,

    /// API identifier sent as the token audience
    pub audience: String,

    /// Client ID of the single-page application
    pub client_id: String,

    /// Redirect target registered with the tenant
    pub callback_url: String,
}

impl Default for Auth0Config {
    fn default() -> Self {
        Self {
            url: AUTH0_DOMAIN.to_string(),
            audience: AUTH0_AUDIENCE.to_string(),
            client_id: AUTH0_CLIENT_ID.to_string(),
            callback_url: DEV_CALLBACK_URL.to_string(),
        }
    }
}

impl Auth0Config {
    /// Tenant domain without scheme or trailing slash
    ///
    /// Accepts either a bare domain or a full origin in `url`. A value
    /// without a dot is treated as a tenant name and expanded to
    /// `<name>.auth0.com`.
    pub fn domain(&self) -> String {
        let trimmed = self.url.trim().trim_end_matches('/');
        let domain = trimmed
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        if domain.contains('.') {
            domain.to_string()
        } else {
            format!("{domain}.auth0.com")
        }
    }

    /// Token issuer URL for the tenant
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// JWKS document used to verify token signatures
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    /// Authorization endpoint for the login redirect
    pub fn authorize_endpoint(&self) -> String {
        format!("https://{}/authorize", self.domain())
    }

    /// Build the implicit-flow login link the frontend sends users to
    ///
    /// `callback_path` is appended to the configured callback URL, so the
    /// tenant redirects back into the view that started the login.
    pub fn login_url(&self, callback_path: &str) -> Result<String> {
        let redirect_uri = join_url(&self.callback_url, callback_path);
        let mut url = Url::parse(&self.authorize_endpoint()).map_err(|e| {
            ConfigurationError::InvalidValue {
                field: "auth0.url".to_string(),
                details: e.to_string(),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &redirect_uri);
        Ok(url.into())
    }

    fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(invalid("auth0.url", "must not be empty"));
        }
        let domain = self.domain();
        if domain.is_empty()
            || domain.starts_with('.')
            || domain.contains('/')
            || domain.contains(':')
            || domain.contains(char::is_whitespace)
        {
            return Err(invalid("auth0.url", "must be a bare domain or origin URL"));
        }
        if self.audience.trim().is_empty() {
            return Err(invalid("auth0.audience", "must not be empty"));
        }
        if self.client_id.trim().is_empty() {
            return Err(invalid("auth0.client_id", "must not be empty"));
        }
        check_http_url("auth0.callback_url", &self.callback_url)
    }
}

/// Deployment environment for the Coffee Shop client applications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Whether this build points at the deployed service
    pub production: bool,

    /// Base URL of the drinks API
    pub api_server_url: String,

    /// Auth0 tenant settings
    pub auth0: Auth0Config,
}

impl Default for Environment {
    fn default() -> Self {
        Self::development()
    }
}

impl Environment {
    /// Preset for local development against a backend on localhost
    pub fn development() -> Self {
        Self {
            production: false,
            api_server_url: DEV_API_SERVER_URL.to_string(),
            auth0: Auth0Config::default(),
        }
    }

    /// Preset for the deployed Coffee Shop service
    pub fn production() -> Self {
        Self {
            production: true,
            api_server_url: API_SERVER_URL.to_string(),
            auth0: Auth0Config {
                callback_url: CALLBACK_URL.to_string(),
                ..Auth0Config::default()
            },
        }
    }

    /// Preset for the given profile
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Development => Self::development(),
            Profile::Production => Self::production(),
        }
    }

    /// Load the environment with file and variable overrides applied
    ///
    /// Values are layered, later sources winning: the preset for the active
    /// profile, then `environment.toml` (or `path` when given), then
    /// `COFFEESHOP_*` variables. The result is validated before it is
    /// returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::for_profile(Profile::from_env());
        let mut figment = Figment::from(Serialized::defaults(defaults));

        if let Some(path) = path {
            if path.exists() {
                debug!("Loading environment overrides from {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        } else {
            let default_path = Path::new(ENVIRONMENT_FILE);
            if default_path.exists() {
                debug!(
                    "Loading environment overrides from {}",
                    default_path.display()
                );
                figment = figment.merge(Toml::file(default_path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let environment: Environment =
            figment.extract().map_err(|e| ConfigurationError::ParseError {
                details: e.to_string(),
            })?;
        environment.validate()?;
        debug!("Environment resolved and validated");
        Ok(environment)
    }

    /// Load the environment from presets and process variables only
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Generate an example override file
    pub fn generate_example() -> Result<String> {
        let environment = Self::development();
        toml::to_string_pretty(&environment).map_err(|e| ConfigurationError::ParseError {
            details: format!("Failed to serialize example environment: {e}"),
        })
    }

    /// Check that every field holds a usable value
    pub fn validate(&self) -> Result<()> {
        check_http_url("api_server_url", &self.api_server_url)?;
        self.auth0.validate()
    }

    /// Join `path` onto the API base URL
    pub fn api_endpoint(&self, path: &str) -> String {
        join_url(&self.api_server_url, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn check_http_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| invalid(field, &e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            &format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(())
}

fn invalid(field: &str, details: &str) -> ConfigurationError {
    ConfigurationError::InvalidValue {
        field: field.to_string(),
        details: details.to_string(),
    }
}
