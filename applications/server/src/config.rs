/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variables of earlier deployments, applied as defaults
const LEGACY_ENV: &[(&str, &str)] = &[
    ("DATABASE_URL", "storage.database_url"),
    ("EXTERNAL_API_URL", "lookup.base_url"),
];

/// Listening port of earlier deployments, either `8080` or `:8080`
const LEGACY_PORT_ENV: &str = "SERVER_PORT";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_lookup")]
    pub lookup: LookupSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Deadline for a whole request, lookup and storage included
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupSettings {
    #[serde(default)]
    pub base_url: String,

    #[serde(default = "default_lookup_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_lookup_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl LookupSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Precedence, lowest first: built-in defaults, `DATABASE_URL` /
    /// `EXTERNAL_API_URL` / `SERVER_PORT`, the TOML file, `SONGBOOK_*`
    /// variables (`SONGBOOK_LOOKUP__BASE_URL`, `SONGBOOK_SERVER__PORT`, ...).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_legacy_env(path, |var| std::env::var(var).ok())
    }

    fn load_with_legacy_env(
        path: Option<&Path>,
        legacy_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        for (var, key) in LEGACY_ENV {
            if let Some(value) = legacy_env(*var) {
                settings = settings
                    .set_default(*key, value)
                    .map_err(|e| ServerError::Config(e.to_string()))?;
            }
        }

        if let Some(value) = legacy_env(LEGACY_PORT_ENV) {
            let port = parse_legacy_port(&value)?;
            settings = settings
                .set_default("server.port", i64::from(port))
                .map_err(|e| ServerError::Config(e.to_string()))?;
        }

        // An explicit path must exist; the default one is optional
        let (config_path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from("config.toml"), false),
        };
        settings = settings.add_source(config::File::from(config_path).required(required));

        settings = settings.add_source(
            config::Environment::with_prefix("SONGBOOK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.server.request_timeout_secs == 0 {
            return Err(ServerError::Config(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.storage.max_connections == 0 {
            return Err(ServerError::Config(
                "storage.max_connections must be greater than zero".to_string(),
            ));
        }

        if self.lookup.base_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Lookup URL is required (set SONGBOOK_LOOKUP__BASE_URL or EXTERNAL_API_URL)"
                    .to_string(),
            ));
        }

        let url = url::Url::parse(&self.lookup.base_url).map_err(|e| {
            ServerError::Config(format!("Invalid lookup URL {:?}: {}", self.lookup.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ServerError::Config(format!(
                "Lookup URL must be http or https, got {:?}",
                self.lookup.base_url
            )));
        }

        if self.lookup.timeout_secs == 0 || self.lookup.connect_timeout_secs == 0 {
            return Err(ServerError::Config(
                "Lookup timeouts must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let host: IpAddr = self.server.host.parse().map_err(|_| {
            ServerError::Config(format!("Invalid host address: {}", self.server.host))
        })?;
        Ok(SocketAddr::from((host, self.server.port)))
    }
}

fn parse_legacy_port(value: &str) -> Result<u16> {
    let value = value.trim();
    let port = value.strip_prefix(':').unwrap_or(value);
    port.parse().map_err(|_| {
        ServerError::Config(format!("Invalid {}: {:?}", LEGACY_PORT_ENV, value))
    })
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        request_timeout_secs: default_request_timeout_secs(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://songbook.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_lookup() -> LookupSettings {
    LookupSettings {
        base_url: String::new(),
        timeout_secs: default_lookup_timeout_secs(),
        connect_timeout_secs: default_lookup_connect_timeout_secs(),
    }
}

fn default_lookup_timeout_secs() -> u64 {
    5
}

fn default_lookup_connect_timeout_secs() -> u64 {
    2
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            lookup: default_lookup(),
        }
    }
}
