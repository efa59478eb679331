use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub site: SiteConfig,
    pub uploads: UploadConfig,
    pub flash: FlashConfig,
    pub nonce: NonceConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Listing page settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Users shown per listing page
    pub page_size: usize,
    /// Image shown for users without a profile image
    pub placeholder_image_url: String,
}

/// Where uploaded images are written and served from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub dir: String,
    pub public_base_url: String,
    /// Largest image accepted; bigger files are reported in the flash
    pub max_bytes: usize,
    /// Largest request body read at all
    pub max_request_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
    /// Seconds an unread flash message survives
    pub ttl_secs: u64,
    pub max_entries: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NonceConfig {
    /// HMAC key; a random key is generated at startup when unset
    pub secret: Option<String>,
    /// Seconds a nonce stays valid
    pub lifetime_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_size: 2,
            placeholder_image_url: "/assets/placeholder.svg".to_string(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: "uploads".to_string(),
            public_base_url: "/uploads".to_string(),
            max_bytes: 8 * 1024 * 1024,
            max_request_bytes: 64 * 1024 * 1024,
        }
    }
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            max_entries: 10_000,
        }
    }
}

impl Default for NonceConfig {
    fn default() -> Self {
        Self {
            secret: None,
            lifetime_secs: 86_400,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
