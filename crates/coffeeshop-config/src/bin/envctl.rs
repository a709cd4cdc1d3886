//! Operational tool for inspecting the Coffee Shop environment
//!
//! `show` prints the resolved environment as TOML, `example` prints an
//! override file template, and `check` resolves and validates every field.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{OffLevel, Verbosity};
use coffeeshop_config::{logging, Environment, Profile};

#[derive(Parser)]
#[command(
    name = "envctl",
    version,
    about = "Inspect the Coffee Shop deployment environment"
)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<OffLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved environment as TOML
    Show {
        /// Override file to layer over the active preset
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print a preset directly instead of resolving overrides
        #[arg(long, conflicts_with = "config")]
        profile: Option<Profile>,
    },
    /// Print an example override file
    Example,
    /// Resolve the environment and validate every field
    Check {
        /// Override file to layer over the active preset
        #[arg(long)]
        config: Option<PathBuf>,

        /// Check a preset directly instead of resolving overrides
        #[arg(long, conflicts_with = "config")]
        profile: Option<Profile>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = format!("{}=info", env!("CARGO_BIN_NAME").replace("-", "_"));
    logging::init_cli_logging(&cli.verbosity, &default_filter)?;

    match cli.command {
        Command::Show { config, profile } => {
            let (_, environment) = resolve(config, profile)?;
            print!("{}", toml::to_string_pretty(&environment)?);
        }
        Command::Example => {
            print!("{}", Environment::generate_example()?);
        }
        Command::Check { config, profile } => {
            let (profile, environment) = resolve(config, profile)?;
            println!("profile: {profile}");
            println!("api server: {}", environment.api_server_url);
            println!("auth0 tenant: {}", environment.auth0.domain());
            println!("ok");
        }
    }

    Ok(())
}

// Returns the profile that seeded the record alongside the record itself;
// field overrides never change the active profile.
fn resolve(config: Option<PathBuf>, profile: Option<Profile>) -> Result<(Profile, Environment)> {
    match profile {
        Some(profile) => {
            let environment = Environment::for_profile(profile);
            environment.validate()?;
            Ok((profile, environment))
        }
        None => {
            let profile = Profile::from_env();
            let environment = Environment::load(config.as_deref())?;
            Ok((profile, environment))
        }
    }
}
