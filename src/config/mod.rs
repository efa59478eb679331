//! Layered configuration: config files, then `APP__` environment variables

mod app_config;

pub use app_config::{
    AppConfig, FlashConfig, LogFormat, LoggingConfig, NonceConfig, ServerConfig, SiteConfig,
    UploadConfig,
};
