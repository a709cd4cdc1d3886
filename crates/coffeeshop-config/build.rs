//! Bakes Auth0 tenant constants and the default profile into the binary.
//!
//! Values come from `COFFEESHOP_*` environment variables at compile time,
//! with `.env` files honored for local builds. Missing variables fall back
//! to the defaults below.

use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_AUTH0_DOMAIN: &str = "amrikhudair.eu.auth0.com";
const DEFAULT_AUTH0_AUDIENCE: &str = "https://coffee-shop.test";
const DEFAULT_AUTH0_CLIENT_ID: &str = "your-client-id";
const DEFAULT_PROFILE: &str = "development";

const BAKED_VARS: [&str; 5] = [
    "COFFEESHOP_AUTH0_DOMAIN",
    "COFFEESHOP_AUTH0_AUDIENCE",
    "COFFEESHOP_AUTH0_CLIENT_ID",
    "COFFEESHOP_AUTH0_ISSUER",
    "COFFEESHOP_PROFILE",
];

fn main() {
    // Pick up .env for local development builds
    let _ = dotenvy::dotenv();

    println!("cargo:rerun-if-changed=.env");
    for var in BAKED_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let domain = baked("COFFEESHOP_AUTH0_DOMAIN", DEFAULT_AUTH0_DOMAIN);
    let audience = baked("COFFEESHOP_AUTH0_AUDIENCE", DEFAULT_AUTH0_AUDIENCE);
    let client_id = baked("COFFEESHOP_AUTH0_CLIENT_ID", DEFAULT_AUTH0_CLIENT_ID);
    let issuer =
        env::var("COFFEESHOP_AUTH0_ISSUER").unwrap_or_else(|_| format!("https://{domain}/"));
    let profile = normalize_profile(&baked("COFFEESHOP_PROFILE", DEFAULT_PROFILE));

    let constants = format!(
        r#"// Generated by build.rs, do not edit.

/// Auth0 tenant domain baked in at compile time.
pub const AUTH0_DOMAIN: &str = {domain:?};

/// API identifier registered with the Auth0 tenant.
pub const AUTH0_AUDIENCE: &str = {audience:?};

/// Client ID of the Coffee Shop single-page application.
pub const AUTH0_CLIENT_ID: &str = {client_id:?};

/// Token issuer URL for the tenant.
pub const AUTH0_ISSUER: &str = {issuer:?};

/// Profile the binary selects when no runtime override is present.
pub const DEFAULT_PROFILE: &str = {profile:?};
"#
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("build_constants.rs"), constants)
        .expect("failed to write build_constants.rs");
}

fn baked(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

fn normalize_profile(raw: &str) -> &'static str {
    match raw.to_lowercase().as_str() {
        "development" | "dev" => "development",
        "production" | "prod" => "production",
        other => panic!("COFFEESHOP_PROFILE must be 'development' or 'production', got '{other}'"),
    }
}
