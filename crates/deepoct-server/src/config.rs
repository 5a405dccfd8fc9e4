use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use eyre::{WrapErr, eyre};
use tracing::warn;

use deepoct_auth::password::DEFAULT_ITERATIONS;
use deepoct_gpt::analyze::DEFAULT_MODEL;
use deepoct_gpt::openai::DEFAULT_BASE_URL;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8006";
pub const DEFAULT_SECRET_KEY: &str = "octmaster-secret-key";
pub const DEFAULT_SESSION_TTL_SECS: i64 = 8 * 60 * 60;
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 120;

/// Server settings, read from the environment.
#[derive(Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub secret_key: String,
    pub session_ttl_secs: i64,
    /// `None` disables the vision model; analyses fall back to defaults.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub openai_timeout: Duration,
    pub seed_doctor_password: String,
    pub seed_admin_password: String,
    pub password_iterations: u32,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("openai_enabled", &self.openai_api_key.is_some())
            .field("openai_base_url", &self.openai_base_url)
            .field("model", &self.model)
            .field("openai_timeout", &self.openai_timeout)
            .field("password_iterations", &self.password_iterations)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = var("DEEPOCT_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .wrap_err("DEEPOCT_BIND_ADDR is not a socket address")?;

        let secret_key = var("SECRET_KEY").unwrap_or_else(|| {
            warn!("SECRET_KEY not set, using the built-in development key");
            DEFAULT_SECRET_KEY.to_string()
        });

        let session_ttl_secs: i64 = parse_or(
            var("DEEPOCT_SESSION_TTL_SECS"),
            "DEEPOCT_SESSION_TTL_SECS",
            DEFAULT_SESSION_TTL_SECS,
        )?;
        if session_ttl_secs <= 0 {
            return Err(eyre!("DEEPOCT_SESSION_TTL_SECS must be positive"));
        }

        let timeout_secs: u64 = parse_or(
            var("OPENAI_TIMEOUT_SECS"),
            "OPENAI_TIMEOUT_SECS",
            DEFAULT_OPENAI_TIMEOUT_SECS,
        )?;
        let password_iterations: u32 = parse_or(
            var("DEEPOCT_PASSWORD_ITERATIONS"),
            "DEEPOCT_PASSWORD_ITERATIONS",
            DEFAULT_ITERATIONS,
        )?;
        if password_iterations == 0 {
            return Err(eyre!("DEEPOCT_PASSWORD_ITERATIONS must be positive"));
        }

        Ok(Self {
            bind_addr,
            secret_key,
            session_ttl_secs,
            openai_api_key: var("OPENAI_API_KEY"),
            openai_base_url: var("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: var("DEEPOCT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_timeout: Duration::from_secs(timeout_secs),
            seed_doctor_password: var("DEEPOCT_SEED_DOCTOR_PASSWORD")
                .unwrap_or_else(|| "password123".to_string()),
            seed_admin_password: var("DEEPOCT_SEED_ADMIN_PASSWORD")
                .unwrap_or_else(|| "admin123".to_string()),
            password_iterations,
        })
    }
}

fn parse_or<T>(value: Option<String>, name: &str, default: T) -> eyre::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("{name} is not a valid number: {raw}")),
        None => Ok(default),
    }
}
