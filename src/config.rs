use crate::error::ConfigError;
use crate::service::CardLayout;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub layout: LayoutConfig,
    /// 单次加载的超时秒数, 0 表示不限制
    pub load_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

// 连接串包含密码, 不打印
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig").field("url", &"<redacted>").finish()
    }
}

/// 卡片布局参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub card_height: u32,
    pub gap: u32,
    pub start_top: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/partner_dashboard".to_string(),
            },
            layout: LayoutConfig {
                card_height: 120,
                gap: 15,
                start_top: 20,
            },
            load_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> dashboard.toml (可选) -> DASHBOARD__* -> SERVER_HOST / SERVER_PORT / DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.url", defaults.database.url)?
            .set_default("layout.card_height", i64::from(defaults.layout.card_height))?
            .set_default("layout.gap", i64::from(defaults.layout.gap))?
            .set_default("layout.start_top", defaults.layout.start_top)?
            .set_default("load_timeout_secs", defaults.load_timeout_secs as i64)?
            .add_source(File::with_name("dashboard").required(false))
            .add_source(
                Environment::with_prefix("DASHBOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.card_height == 0 {
            return Err(ConfigError::InvalidLayout("card_height must be positive"));
        }
        Ok(())
    }

    pub fn card_layout(&self) -> CardLayout {
        CardLayout {
            card_height: self.layout.card_height,
            gap: self.layout.gap,
            start_top: self.layout.start_top,
        }
    }

    pub fn load_timeout(&self) -> Option<Duration> {
        (self.load_timeout_secs > 0).then(|| Duration::from_secs(self.load_timeout_secs))
    }
}
