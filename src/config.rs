use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub jwt: JwtConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Upper bound on buffered thumbnail bytes
    #[serde(default = "default_max_thumbnail_bytes")]
    pub max_thumbnail_bytes: usize,
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8091
}

fn default_db_path() -> String {
    "data/tubely.db".to_string()
}

fn default_issuer() -> String {
    "tubely".to_string()
}

fn default_max_thumbnail_bytes() -> usize {
    10 << 20 // 10 MiB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: default_issuer(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_thumbnail_bytes: default_max_thumbnail_bytes(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from_file()?;
        config.apply_env_overrides();
        config.validate()?;
        config.ensure_directories()?;
        tracing::info!(
            "Upload limit: {} bytes, JWT issuer: {}",
            config.upload.max_thumbnail_bytes,
            config.jwt.issuer
        );
        Ok(config)
    }

    /// Load configuration from config.toml
    fn load_from_file() -> anyhow::Result<Self> {
        let config_paths = ["config.toml", "data/config.toml"];

        for path in config_paths {
            if Path::new(path).exists() {
                let content = fs::read_to_string(path)?;
                let config: Config = toml::from_str(&content)?;
                tracing::info!("Loaded configuration from {}", path);
                return Ok(config);
            }
        }

        tracing::info!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Apply environment variable overrides
    /// Format: TUBELY_CONF_<SECTION>_<KEY>
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(val) = lookup("TUBELY_CONF_SERVER_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("TUBELY_CONF_SERVER_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }

        // Database overrides
        if let Some(val) = lookup("TUBELY_CONF_DATABASE_PATH") {
            self.database.path = val;
        }

        // JWT overrides
        if let Some(val) = lookup("TUBELY_CONF_JWT_SECRET") {
            self.jwt.secret = val;
        }
        if let Some(val) = lookup("TUBELY_CONF_JWT_ISSUER") {
            if !val.trim().is_empty() {
                self.jwt.issuer = val;
            }
        }

        // Upload overrides
        if let Some(bytes) =
            lookup("TUBELY_CONF_UPLOAD_MAX_THUMBNAIL_BYTES").and_then(|v| v.parse().ok())
        {
            self.upload.max_thumbnail_bytes = bytes;
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.jwt.secret.trim().is_empty() {
            anyhow::bail!("JWT secret is not configured (set TUBELY_CONF_JWT_SECRET)");
        }
        if self.upload.max_thumbnail_bytes == 0 {
            anyhow::bail!("upload.max_thumbnail_bytes must be greater than zero");
        }
        Ok(())
    }

    /// Ensure the database directory exists
    fn ensure_directories(&self) -> anyhow::Result<()> {
        if let Some(parent) = Path::new(&self.database.path).parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
