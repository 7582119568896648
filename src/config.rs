//! Application configuration loaded from environment variables.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use serde::{Deserialize, Deserializer};

/// Application configuration loaded from environment variables.
///
/// Read once at startup: `HOST`, `PORT`, `DEBUG`. Every field has a
/// default, so an empty environment yields a working configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Debug mode: raises the default log verbosity.
    #[serde(default = "default_debug", deserialize_with = "de_truthy")]
    pub debug: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_debug() -> bool {
    true
}

/// Case-insensitive truthiness: exactly "true" in any casing is true,
/// everything else ("1", "yes", ...) is false.
fn de_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.eq_ignore_ascii_case("true"))
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST is not a valid IP address: {}", self.host));
        }

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> String {
        if self.debug {
            "devops_info_service=debug,tower_http=debug,info".to_string()
        } else {
            "info".to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: default_debug(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, envy::Error> {
        envy::from_iter(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn empty_environment_yields_the_documented_defaults() {
        let config = from_pairs(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.debug);
    }

    #[test]
    fn environment_overrides_every_field() {
        let config = from_pairs(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEBUG", "false"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
    }

    #[test]
    fn debug_parsing_is_case_insensitive() {
        for raw in ["true", "True", "TRUE", "tRuE"] {
            let config = from_pairs(&[("DEBUG", raw)]).unwrap();
            assert!(config.debug, "expected {:?} to be true", raw);
        }

        // Only "true" spellings count; common truthy aliases do not.
        for raw in ["1", "yes", "on", "false", ""] {
            let config = from_pairs(&[("DEBUG", raw)]).unwrap();
            assert!(!config.debug, "expected {:?} to be false", raw);
        }
    }

    #[test]
    fn validate_rejects_a_hostname_as_bind_address() {
        let config = Config {
            host: "localhost".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_port_zero() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_the_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
            debug: false,
        };

        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn log_filter_follows_debug_mode() {
        let quiet = Config {
            debug: false,
            ..Config::default()
        };
        assert_eq!(quiet.default_log_filter(), "info");

        let verbose = Config::default();
        assert!(verbose.default_log_filter().contains("devops_info_service=debug"));
    }
}
