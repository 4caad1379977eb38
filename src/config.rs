use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use crate::{fetch::DEFAULT_TIMEOUT_SECS, resolver::DEFAULT_IPFS_GATEWAY};

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub ipfs_gateway: String,
    pub fetch_timeout_secs: u64,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Algorand asset metadata URL resolver")]
pub struct Args {
    /// Host to bind to (overrides ASSET_RESOLVER_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides ASSET_RESOLVER_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database URL for the resolution cache (overrides ASSET_RESOLVER_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// IPFS HTTP gateway base (overrides ASSET_RESOLVER_IPFS_GATEWAY)
    #[arg(long)]
    pub ipfs_gateway: Option<String>,

    /// Metadata fetch timeout in seconds (overrides ASSET_RESOLVER_FETCH_TIMEOUT_SECS)
    #[arg(long)]
    pub fetch_timeout_secs: Option<u64>,

    /// Run migrations and exit
    #[arg(long)]
    pub migrate: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and migrate flag.
    pub fn from_env_and_args() -> Result<(Self, bool)> {
        let args = Args::parse();
        let migrate = args.migrate;
        let cfg = Self::merge(args, |key| env::var(key))?;
        Ok((cfg, migrate))
    }

    /// Merge CLI args over values read through `lookup`, falling back to
    /// built-in defaults.
    pub fn merge<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|_| default.into());

        // --- Environment fallback ---
        let env_host = env_or("ASSET_RESOLVER_HOST", "0.0.0.0");
        let env_port = parse_var(&lookup, "ASSET_RESOLVER_PORT", 3000u16)?;
        let env_db = env_or(
            "ASSET_RESOLVER_DATABASE_URL",
            "sqlite://./data/asset_resolver.db",
        );
        let env_gateway = env_or("ASSET_RESOLVER_IPFS_GATEWAY", DEFAULT_IPFS_GATEWAY);
        let env_timeout = parse_var(
            &lookup,
            "ASSET_RESOLVER_FETCH_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?;

        // --- Merge ---
        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database_url: args.database_url.unwrap_or(env_db),
            ipfs_gateway: args.ipfs_gateway.unwrap_or(env_gateway),
            fetch_timeout_secs: args.fetch_timeout_secs.unwrap_or(env_timeout),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Result<String, env::VarError>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("parsing {} value `{}`", key, value)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {}", key)),
    }
}
