use config::{Config as ConfigLoader, ConfigError, File};
use serde::Deserialize;
use std::path::Path;
use studiodesk_flow::GatewayConfig;
use studiodesk_persist::StoreBackend;

/// Environment variables that override file settings
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("SERVER_REQUEST_TIMEOUT_SECS", "server.request_timeout_secs"),
    ("SERVER_SESSION_IDLE_TIMEOUT_SECS", "server.session_idle_timeout_secs"),
    ("LLM_MODEL", "llm.model"),
    ("LLM_TEMPERATURE", "llm.temperature"),
    ("LLM_MAX_TOKENS", "llm.max_tokens"),
    ("LLM_BASE_URL", "llm.base_url"),
    ("STORE_BACKEND", "store.backend"),
    ("MONGODB_DATABASE", "mongodb.database"),
    ("MONGODB_SEED_REFERENCE_DATA", "mongodb.seed_reference_data"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub mongodb: MongoDbConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(skip)]
    pub mongodb_uri: Option<String>,
    #[serde(skip)]
    pub openai_api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    /// Chat sessions with no message for this long are dropped; 0 keeps them forever
    pub session_idle_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 120,
            session_idle_timeout_secs: 3600,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// OpenAI-compatible endpoint; the public API when unset
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        let gateway = GatewayConfig::default();
        Self {
            model: gateway.model,
            temperature: gateway.temperature,
            max_tokens: gateway.max_tokens,
            base_url: None,
        }
    }
}

impl From<&LlmConfig> for GatewayConfig {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MongoDbConfig {
    pub database: String,
    pub seed_reference_data: bool,
}

impl Default for MongoDbConfig {
    fn default() -> Self {
        Self {
            database: "studiodesk".to_string(),
            seed_reference_data: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables (SERVER_, LLM_, STORE_, MONGODB_, LOG_ prefixes)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Path::new("config"), |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an explicit config directory and variable lookup
    pub fn load_with<F>(dir: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = env("ENV").unwrap_or_else(|| "dev".to_string());

        let mut builder = ConfigLoader::builder()
            // 1. Load default config
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            // 2. Load environment-specific config
            .add_source(File::with_name(&dir.join(&profile).to_string_lossy()).required(false));

        // 3. Environment variables override everything
        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, env(var).filter(|v| !v.is_empty()))?;
        }

        let mut cfg: Config = builder.build()?.try_deserialize()?;

        // Load secrets from ENV (not in TOML)
        cfg.openai_api_key = env("OPENAI_API_KEY").filter(|k| !k.trim().is_empty());
        cfg.mongodb_uri = env("MONGODB_URI").filter(|u| !u.trim().is_empty());

        cfg.validate()?;
        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.backend == StoreBackend::MongoDb && self.mongodb_uri.is_none() {
            return Err(ConfigError::Message(
                "MONGODB_URI environment variable is required for the mongodb store".to_string(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(ConfigError::Message(format!(
                "Unknown log format: {} (expected json or pretty)",
                self.logging.format
            )));
        }
        Ok(())
    }
}
