// Configuration management module
// This file handles loading and parsing of configuration settings
// from built-in defaults, an optional config file, and environment variables
//
// Numan Thabit 2025 Nov

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

/// Env var naming an explicit config file (any format the `config` crate reads).
pub const CONFIG_PATH_ENV: &str = "PRIME_SERVICE_CONFIG";
const DEFAULT_CONFIG_NAME: &str = "prime-service";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface to bind, e.g. 0.0.0.0
    pub listen_host: String,
    /// TCP port for both the API and /metrics
    pub listen_port: u16,
}

impl AppConfig {
    /// Defaults, then `prime-service.{toml,yaml,json}` (or `$PRIME_SERVICE_CONFIG`)
    /// if present, then `APP__*` environment variables.
    pub fn load() -> Result<Self> {
        let file = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => config::File::with_name(&path).required(true),
            Err(_) => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };
        Self::layered(file, environment())
    }

    /// Defaults, then `file`, then `env`; later sources win key by key.
    pub fn layered<S>(file: S, env: config::Environment) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Self::from_builder(defaults()?.add_source(file).add_source(env))
    }

    /// Defaults overlaid with an in-memory document.
    pub fn from_document(contents: &str, format: config::FileFormat) -> Result<Self> {
        Self::from_builder(defaults()?.add_source(config::File::from_str(contents, format)))
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let cfg = builder.build().context("assemble configuration sources")?;
        cfg.try_deserialize().context("deserialize configuration")
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .listen_host
            .parse()
            .with_context(|| format!("invalid listen host: {}", self.listen_host))?;
        Ok(SocketAddr::new(ip, self.listen_port))
    }
}

/// `APP__LISTEN_PORT=3002` style variables, parsed into numbers where possible.
pub fn environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .separator("__")
        .try_parsing(true)
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("listen_host", "0.0.0.0")?
        .set_default("listen_port", 8080)?)
}
