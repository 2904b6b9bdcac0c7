use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub uri: String,
    #[serde(default = "default_db_name")]
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { uri: String::new(), name: default_db_name() }
    }
}

fn default_db_name() -> String {
    "carryou".to_string()
}

pub fn load_default() -> Result<AppConfig> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {path}"))?;
    parse_toml(&content)
}

fn parse_toml(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` when present, overlay environment variables, and
    /// validate the result. A missing file is not an error; a missing
    /// database URI is.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    /// `SERVER_HOST` and `PORT` override the file values when set.
    fn normalize_from_env(&mut self) -> Result<()> {
        if let Ok(host) = env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = port.parse().context("PORT must be a valid port number")?;
        }
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be non-zero"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Fill the URI and database name from `MONGODB_URI` / `MONGODB_DB`
    /// when the file did not provide them.
    pub fn normalize_from_env(&mut self) {
        if self.uri.trim().is_empty() {
            if let Ok(uri) = env::var("MONGODB_URI") {
                self.uri = uri;
            }
        }
        if let Ok(name) = env::var("MONGODB_DB") {
            self.name = name;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.uri.trim().is_empty() {
            return Err(anyhow!(
                "database.uri is empty; provide it in config.toml or the MONGODB_URI environment variable"
            ));
        }
        let lower = self.uri.to_lowercase();
        if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
            return Err(anyhow!("database.uri must start with mongodb:// or mongodb+srv://"));
        }
        if self.name.trim().is_empty() {
            return Err(anyhow!("database.name must not be empty"));
        }
        Ok(())
    }
}
