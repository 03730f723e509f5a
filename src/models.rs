//! Response bodies served by the demo endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Config;

// ---

/// Service name reported by `/` and `/api/info`.
pub const SERVICE_NAME: &str = "gitops-demo-app";

/// Placeholder reported by `/metrics` until uptime is tracked.
pub const UPTIME_PLACEHOLDER: &str = "TODO: implement uptime tracking";

/// Compiler version captured by `build.rs`.
pub const RUST_VERSION: &str = env!("RUSTC_VERSION");

/// Format a UTC instant as ISO-8601 with microseconds and no zone suffix,
/// e.g. `2024-01-15T10:30:00.123456`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Current UTC time in the wire format.
pub fn now_timestamp() -> String {
    iso_timestamp(Utc::now())
}

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    // ---
    pub service: String,
    pub version: String,
    pub environment: String,
    pub hostname: String,
    pub timestamp: String,
    pub message: String,
}

impl HomeResponse {
    // ---
    pub fn new(config: &Config, timestamp: String) -> Self {
        // ---
        HomeResponse {
            service: SERVICE_NAME.to_string(),
            version: config.app_version.clone(),
            environment: config.environment.clone(),
            hostname: config.hostname.clone(),
            timestamp,
            message: format!("Hello from {} environment!", config.environment),
        }
    }
}

/// Body of the liveness and readiness probes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub status: String,
    pub timestamp: String,
}

/// Body of `GET /metrics`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    // ---
    pub app_version: String,
    pub environment: String,
    pub hostname: String,
    pub uptime: String,
}

impl From<&Config> for MetricsResponse {
    fn from(config: &Config) -> Self {
        MetricsResponse {
            app_version: config.app_version.clone(),
            environment: config.environment.clone(),
            hostname: config.hostname.clone(),
            uptime: UPTIME_PLACEHOLDER.to_string(),
        }
    }
}

/// Body of `GET /api/info`.
#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub application: ApplicationInfo,
    pub runtime: RuntimeInfo,
    pub request: RequestInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RuntimeInfo {
    pub hostname: String,
    pub rust_version: String,
}

/// What the server observed about the calling request.
#[derive(Debug, Serialize, Deserialize)]
pub struct RequestInfo {
    pub method: String,
    pub path: String,
    pub remote_addr: String,
}

impl InfoResponse {
    // ---
    pub fn new(config: &Config, request: RequestInfo) -> Self {
        // ---
        InfoResponse {
            application: ApplicationInfo {
                name: SERVICE_NAME.to_string(),
                version: config.app_version.clone(),
                environment: config.environment.clone(),
            },
            runtime: RuntimeInfo {
                hostname: config.hostname.clone(),
                rust_version: RUST_VERSION.to_string(),
            },
            request,
        }
    }
}

/// JSON envelope for client-visible errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub status: u16,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    fn create_test_config(environment: &str) -> Config {
        // ---
        Config {
            app_version: "2.3.4".to_string(),
            environment: environment.to_string(),
            hostname: "pod-abc".to_string(),
            port: 8080,
        }
    }

    #[test]
    fn test_timestamp_format() {
        // ---
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
            + chrono::Duration::microseconds(123_456);

        assert_eq!(iso_timestamp(at), "2024-01-15T10:30:00.123456");
    }

    #[test]
    fn test_timestamp_keeps_fraction_on_whole_seconds() {
        // ---
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        // Fixed width: the fraction is never dropped
        assert_eq!(iso_timestamp(at), "2024-01-15T10:30:00.000000");
    }

    #[test]
    fn test_timestamp_has_no_zone_suffix() {
        // ---
        let ts = now_timestamp();

        assert!(!ts.ends_with('Z'));
        assert!(!ts.contains('+'));
        assert!(NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }

    #[test]
    fn test_home_message() {
        // ---
        let home = HomeResponse::new(&create_test_config("staging"), "t".to_string());

        assert_eq!(home.service, "gitops-demo-app");
        assert_eq!(home.version, "2.3.4");
        assert_eq!(home.hostname, "pod-abc");
        assert_eq!(home.message, "Hello from staging environment!");
    }

    #[test]
    fn test_metrics_uptime_is_placeholder() {
        // ---
        let metrics = MetricsResponse::from(&create_test_config("production"));

        assert_eq!(metrics.uptime, "TODO: implement uptime tracking");
        assert_eq!(metrics.environment, "production");
    }

    #[test]
    fn test_info_groups() {
        // ---
        let request = RequestInfo {
            method: "GET".to_string(),
            path: "/api/info".to_string(),
            remote_addr: "10.0.0.7".to_string(),
        };
        let info = InfoResponse::new(&create_test_config("staging"), request);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["application"]["name"], "gitops-demo-app");
        assert_eq!(json["application"]["version"], "2.3.4");
        assert_eq!(json["runtime"]["hostname"], "pod-abc");
        assert!(!json["runtime"]["rust_version"].as_str().unwrap().is_empty());
        assert_eq!(json["request"]["remote_addr"], "10.0.0.7");
    }
}
