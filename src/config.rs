use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub church: ChurchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// The remote data store coordinates. Both strings must be non-empty for
/// remote-backed mode; anything less means demo mode, which is a supported
/// configuration rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub service_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub expires_in: i64, // seconds
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expires_in: 43_200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "console_state.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurchConfig {
    pub name: String,
}

impl Default for ChurchConfig {
    fn default() -> Self {
        Self {
            name: "Grace Community Church".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => {
                toml::from_str(&config_str).map_err(|e| format!("failed to parse {config_path}: {e}"))?
            }
            // No config file is a normal deployment: defaults boot the
            // console in demo mode unless the store env vars are set.
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(format!("failed to read {config_path}: {e}").into());
            }
        };

        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("STORE_URL") {
            config.store.url = v;
        }
        if let Ok(v) = env::var("STORE_SERVICE_KEY") {
            config.store.service_key = v;
        }
        if let Ok(v) = env::var("SESSION_SECRET") {
            config.session.secret = v;
        }
        if let Ok(v) = env::var("SESSION_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            config.session.expires_in = n;
        }
        if let Ok(v) = env::var("STORAGE_PATH") {
            config.storage.path = v;
        }
        if let Ok(v) = env::var("CHURCH_NAME") {
            config.church.name = v;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_demo_mode() {
        let config = Config::default();
        assert!(config.store.url.is_empty());
        assert!(config.store.service_key.is_empty());
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [store]
            url = "https://example.supabase.co"
            service_key = "key"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.url, "https://example.supabase.co");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.session.expires_in, 43_200);
    }
}
