//! Runtime settings from environment variables (a `.env` file is loaded by the binary first).

use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Set by the Lambda runtime in every function container.
pub const LAMBDA_RUNTIME_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// How the router is exposed. `HOSTING=auto` (the default) resolves to one of these at load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hosting {
    Server,
    Lambda,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    pub hosting: Hosting,
    /// Mount `/api-docs/openapi.json` and `/docs`.
    pub api_docs: bool,
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            hosting: Hosting::Server,
            api_docs: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_format: LogFormat::Text,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let mut hosting = None;
        if let Some(v) = lookup("HOST") {
            settings.host = v.trim().parse().map_err(|_| invalid("HOST", &v))?;
        }
        if let Some(v) = lookup("PORT") {
            settings.port = v.trim().parse().map_err(|_| invalid("PORT", &v))?;
        }
        if let Some(v) = lookup("HOSTING") {
            hosting = match v.trim().to_ascii_lowercase().as_str() {
                "auto" => None,
                "server" => Some(Hosting::Server),
                "lambda" => Some(Hosting::Lambda),
                _ => return Err(invalid("HOSTING", &v)),
            };
        }
        if let Some(v) = lookup("API_DOCS") {
            settings.api_docs = parse_bool(&v).ok_or_else(|| invalid("API_DOCS", &v))?;
        }
        if let Some(v) = lookup("MAX_BODY_BYTES") {
            settings.max_body_bytes = v
                .trim()
                .parse()
                .map_err(|_| invalid("MAX_BODY_BYTES", &v))?;
        }
        if let Some(v) = lookup("LOG_FORMAT") {
            settings.log_format = match v.trim().to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => return Err(invalid("LOG_FORMAT", &v)),
            };
        }
        settings.hosting = hosting.unwrap_or_else(|| {
            if lookup(LAMBDA_RUNTIME_ENV).is_some() {
                Hosting::Lambda
            } else {
                Hosting::Server
            }
        });
        Ok(settings)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_resolve_auto_to_server() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s.hosting, Hosting::Server);
        assert_eq!(s.bind_addr(), "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert!(s.api_docs);
        assert_eq!(s.max_body_bytes, 64 * 1024);
        assert_eq!(s.log_format, LogFormat::Text);
    }

    #[test]
    fn auto_picks_lambda_inside_runtime() {
        let s = Settings::from_lookup(lookup(&[(LAMBDA_RUNTIME_ENV, "127.0.0.1:9001")])).unwrap();
        assert_eq!(s.hosting, Hosting::Lambda);
    }

    #[test]
    fn explicit_server_wins_over_runtime_env() {
        let s = Settings::from_lookup(lookup(&[
            (LAMBDA_RUNTIME_ENV, "127.0.0.1:9001"),
            ("HOSTING", "server"),
        ]))
        .unwrap();
        assert_eq!(s.hosting, Hosting::Server);
    }

    #[test]
    fn explicit_auto_still_detects_runtime() {
        let s = Settings::from_lookup(lookup(&[
            (LAMBDA_RUNTIME_ENV, "127.0.0.1:9001"),
            ("HOSTING", "AUTO"),
        ]))
        .unwrap();
        assert_eq!(s.hosting, Hosting::Lambda);
        let s = Settings::from_lookup(lookup(&[("HOSTING", "lambda")])).unwrap();
        assert_eq!(s.hosting, Hosting::Lambda);
    }

    #[test]
    fn parses_overrides() {
        let s = Settings::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("API_DOCS", "off"),
            ("MAX_BODY_BYTES", "1024"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(s.bind_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert!(!s.api_docs);
        assert_eq!(s.max_body_bytes, 1024);
        assert_eq!(s.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_values() {
        let err = Settings::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
        let err = Settings::from_lookup(lookup(&[("HOSTING", "k8s")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "HOSTING", .. }));
        let err = Settings::from_lookup(lookup(&[("API_DOCS", "maybe")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for API_DOCS: 'maybe'");
    }
}
