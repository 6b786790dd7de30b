use anyhow::{bail, Context, Result};
use std::time::Duration;

/// Public endpoint of the Microsoft Translator v3 API.
pub const DEFAULT_TRANSLATOR_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct Config {
    // Translation provider
    pub translator_endpoint: String,
    pub translator_key: String,
    pub translator_region: String,
    pub request_timeout_secs: u64,

    // Server
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Provider - key and region are never defaulted
            translator_endpoint: std::env::var("TRANSLATOR_ENDPOINT")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_TRANSLATOR_ENDPOINT.to_string()),
            translator_key: required_var("TRANSLATOR_KEY")?,
            translator_region: required_var("TRANSLATOR_REGION")?,
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),

            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT must be a valid number, got '{}'", value))?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }

    /// Upper bound on a single outbound provider call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("translator_endpoint", &self.translator_endpoint)
            .field("translator_key", &"***")
            .field("translator_region", &self.translator_region)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

fn required_var(name: &str) -> Result<String> {
    let value = std::env::var(name).with_context(|| format!("{} not set", name))?;
    if value.trim().is_empty() {
        bail!("{} is empty", name);
    }
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "TRANSLATOR_ENDPOINT",
        "TRANSLATOR_KEY",
        "TRANSLATOR_REGION",
        "REQUEST_TIMEOUT_SECS",
        "HOST",
        "PORT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn set_credentials() {
        std::env::set_var("TRANSLATOR_KEY", "test-key");
        std::env::set_var("TRANSLATOR_REGION", "westeurope");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        set_credentials();

        let config = Config::from_env().expect("Should load config");

        assert_eq!(config.translator_endpoint, DEFAULT_TRANSLATOR_ENDPOINT);
        assert_eq!(config.translator_key, "test-key");
        assert_eq!(config.translator_region, "westeurope");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.bind_address(), "0.0.0.0:3000");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_credentials();
        std::env::set_var("TRANSLATOR_ENDPOINT", "http://localhost:9000/");
        std::env::set_var("REQUEST_TIMEOUT_SECS", "3");
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");

        let config = Config::from_env().expect("Should load config");

        assert_eq!(config.translator_endpoint, "http://localhost:9000");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key() {
        clear_env();
        std::env::set_var("TRANSLATOR_REGION", "westeurope");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TRANSLATOR_KEY not set"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_blank_region() {
        clear_env();
        std::env::set_var("TRANSLATOR_KEY", "test-key");
        std::env::set_var("TRANSLATOR_REGION", "   ");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TRANSLATOR_REGION is empty"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        set_credentials();
        std::env::set_var("PORT", "not-a-port");

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout_falls_back() {
        clear_env();
        set_credentials();
        std::env::set_var("REQUEST_TIMEOUT_SECS", "0");

        let config = Config::from_env().expect("Should load config");
        assert_eq!(config.request_timeout_secs, 10);

        clear_env();
    }

    #[test]
    fn test_debug_masks_key() {
        let config = Config {
            translator_endpoint: DEFAULT_TRANSLATOR_ENDPOINT.to_string(),
            translator_key: "super-secret".to_string(),
            translator_region: "global".to_string(),
            request_timeout_secs: 10,
            host: "0.0.0.0".to_string(),
            port: 3000,
        };

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("super-secret"));
    }
}
