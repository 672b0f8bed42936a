use std::fmt;

use anyhow::{Context, Result};

use crate::llm_client::GITHUB_MODELS_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if `GITHUB_TOKEN` is missing or empty.
#[derive(Clone)]
pub struct Config {
    pub github_token: String,
    pub models_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &"<redacted>")
            .field("models_url", &self.models_url)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            github_token: require_var(&var, "GITHUB_TOKEN")?,
            models_url: var("GITHUB_MODELS_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| GITHUB_MODELS_URL.to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_var<F>(var: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
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
    fn test_missing_token_is_fatal() {
        let err = Config::from_vars(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_empty_token_is_fatal() {
        let err = Config::from_vars(lookup(&[("GITHUB_TOKEN", "  ")])).unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_vars(lookup(&[("GITHUB_TOKEN", "ghp_test")])).unwrap();
        assert_eq!(config.github_token, "ghp_test");
        assert_eq!(config.models_url, GITHUB_MODELS_URL);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::from_vars(lookup(&[
            ("GITHUB_TOKEN", "ghp_test"),
            (
                "GITHUB_MODELS_URL",
                "https://models.github.ai/orgs/acme/inference/chat/completions",
            ),
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert!(config.models_url.contains("/orgs/acme/"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::from_vars(lookup(&[("GITHUB_TOKEN", "t"), ("PORT", "http")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::from_vars(lookup(&[("GITHUB_TOKEN", "ghp_secret")])).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("ghp_secret"));
        assert!(printed.contains("<redacted>"));
    }
}
