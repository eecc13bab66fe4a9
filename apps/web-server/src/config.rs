//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Deployment mode, selected by the `ENV` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("development") => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub host: String,
    pub port: u16,
    /// Base URL of the upstream movies/auth API, without trailing slash.
    pub api_url: String,
    /// Sent with every upstream sign-in.
    pub api_key_token: Option<String>,
    /// Domain attribute of the `token` cookie; host-only when unset.
    pub cookie_domain: Option<String>,
    pub manifest_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Self {
            env: Environment::parse(var("ENV").as_deref()),
            host: non_empty("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            api_url: non_empty("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            api_key_token: non_empty("API_KEY_TOKEN"),
            cookie_domain: non_empty("COOKIE_DOMAIN"),
            manifest_path: non_empty("MANIFEST_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public/manifest.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.env, Environment::Production);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.api_key_token, None);
        assert_eq!(config.cookie_domain, None);
        assert_eq!(config.manifest_path, PathBuf::from("public/manifest.json"));
    }

    #[test]
    fn test_reads_environment() {
        let config = config(&[
            ("ENV", "development"),
            ("PORT", "3001"),
            ("API_URL", "https://api.platzivideo.com/"),
            ("COOKIE_DOMAIN", "platzivideo.com"),
        ]);
        assert!(config.env.is_development());
        assert_eq!(config.port, 3001);
        assert_eq!(config.api_url, "https://api.platzivideo.com");
        assert_eq!(config.cookie_domain.as_deref(), Some("platzivideo.com"));
    }

    #[test]
    fn test_invalid_port_falls_back() {
        assert_eq!(config(&[("PORT", "eighty")]).port, 8080);
    }
}
