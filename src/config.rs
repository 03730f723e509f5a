//! Configuration loader for the `gitops-demo-app` service.
//!
//! All runtime values are read once at startup, from the process environment
//! (with optional `.env` support provided by the caller), and frozen into a
//! [`Config`] that is handed to the router as state. Handlers never touch
//! `env::var` themselves.
use std::env;

use anyhow::{anyhow, Result};

/// Environment name that turns on development conveniences.
pub const DEVELOPMENT: &str = "development";

/// Parse an optional integer variable with a default value.
macro_rules! parse_env_u16 {
    ($get:expr, $var_name:expr, $default:expr) => {
        $get($var_name)
            .map(|v| v.trim().parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read an optional string variable with a default value.
macro_rules! env_or {
    ($get:expr, $var_name:expr, $default:expr) => {
        $get($var_name).unwrap_or_else(|| $default.to_string())
    };
}

/// Strongly typed application configuration.
///
/// Immutable after loading; every request sees the same snapshot.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Version reported by `/`, `/metrics` and `/api/info`.
    pub app_version: String,

    /// Deployment environment name (e.g. `development`, `staging`).
    pub environment: String,

    /// Host name of the machine or pod, resolved once.
    pub hostname: String,

    /// TCP port the listener binds on `0.0.0.0`.
    pub port: u16,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `APP_VERSION` – reported version (default: `1.0.0`)
/// - `ENVIRONMENT` – environment name (default: `development`)
/// - `PORT` – listen port (default: 8080)
///
/// Returns an error if `PORT` is set but is not a valid port number.
pub fn load_from_env() -> Result<Config> {
    // ---
    load_with(|name| env::var(name).ok())
}

/// Build a [`Config`] from an arbitrary variable lookup.
fn load_with<F>(get: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // ---
    let app_version = env_or!(get, "APP_VERSION", "1.0.0");
    let environment = env_or!(get, "ENVIRONMENT", DEVELOPMENT);
    let port = parse_env_u16!(get, "PORT", 8080);

    Ok(Config {
        app_version,
        environment,
        hostname: resolve_hostname(),
        port,
    })
}

/// Host name as reported by the OS, or `unknown` if it cannot be read.
///
/// Runs before the tracing subscriber is installed, so a failure shows up
/// only as `HOSTNAME : unknown` in [`Config::log_config`].
fn resolve_hostname() -> String {
    // ---
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string())
}

impl Config {
    /// True when running in the `development` environment.
    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT
    }

    /// Log the loaded configuration.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  APP_VERSION : {}", self.app_version);
        tracing::info!("  ENVIRONMENT : {}", self.environment);
        tracing::info!("  HOSTNAME    : {}", self.hostname);
        tracing::info!("  PORT        : {}", self.port);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::collections::HashMap;
    use tokio_test::{assert_err, assert_ok};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        // ---
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        // ---
        let cfg = assert_ok!(load_with(lookup(&[])));

        assert_eq!(cfg.app_version, "1.0.0");
        assert_eq!(cfg.environment, "development");
        assert_eq!(cfg.port, 8080);
        assert!(cfg.is_development());
        assert!(!cfg.hostname.is_empty());
    }

    #[test]
    fn test_values_taken_verbatim() {
        // ---
        let cfg = assert_ok!(load_with(lookup(&[
            ("APP_VERSION", "2.3.4"),
            ("ENVIRONMENT", "Staging"),
            ("PORT", "9090"),
        ])));

        // No casing or trimming applied to string values
        assert_eq!(cfg.app_version, "2.3.4");
        assert_eq!(cfg.environment, "Staging");
        assert_eq!(cfg.port, 9090);
        assert!(!cfg.is_development());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        // ---
        let err = assert_err!(load_with(lookup(&[("PORT", "eighty")])));
        assert!(err.to_string().starts_with("Invalid PORT"));

        let err = assert_err!(load_with(lookup(&[("PORT", "70000")])));
        assert!(err.to_string().starts_with("Invalid PORT"));
    }
}
