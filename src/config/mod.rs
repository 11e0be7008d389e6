use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{CatalogError, Result};

/// Key/value configuration source
///
/// `ConfigService::new()` snapshots the process environment (after `.env`
/// has been loaded by the binary); tests build one by hand with [`ConfigService::empty`].
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    fn parse_or<T: FromStr>(&self, key: &str, default: T) -> Result<T> {
        match self.get(key).map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => raw.parse().map_err(|_| {
                CatalogError::Internal(format!("invalid value for {}: {:?}", key, raw))
            }),
            _ => Ok(default),
        }
    }
}

/// Which product store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Database,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StoreKind::Memory),
            "database" | "db" => Ok(StoreKind::Database),
            other => Err(format!("unknown store kind: {}", other)),
        }
    }
}

pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:3000";

/// Typed server settings read from a [`ConfigService`]
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub seed_demo: bool,
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub init_timeout: Duration,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            cors_origins: vec![DEFAULT_CLIENT_ORIGIN.to_string()],
            seed_demo: true,
            store: StoreKind::Memory,
            database_url: None,
            init_timeout: Duration::from_secs(30),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let defaults = Self::default();

        let cors_origins = config
            .get_or("CATALOG_CORS_ORIGINS", DEFAULT_CLIENT_ORIGIN)
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let store = config
            .get_or("CATALOG_STORE", "memory")
            .parse::<StoreKind>()
            .map_err(CatalogError::Internal)?;

        let database_url = config.get("DATABASE_URL").filter(|v| !v.trim().is_empty());
        if store == StoreKind::Database && database_url.is_none() {
            return Err(CatalogError::Internal(
                "CATALOG_STORE=database requires DATABASE_URL".to_string(),
            ));
        }

        Ok(Self {
            host: config.get_or("CATALOG_HOST", &defaults.host),
            port: config.parse_or("CATALOG_PORT", defaults.port)?,
            cors_origins,
            seed_demo: config.parse_or("CATALOG_SEED_DEMO", defaults.seed_demo)?,
            store,
            database_url,
            init_timeout: Duration::from_secs(
                config.parse_or("CATALOG_INIT_TIMEOUT_SECS", defaults.init_timeout.as_secs())?,
            ),
            log_level: config.get_or("CATALOG_LOG", &defaults.log_level),
        })
    }

    /// Host and port for `TcpListener::bind`; the host may be a name such as `localhost`.
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
