use folio_infra::ConnectionSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// 请求体上限（字节）
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8090,
            host: "0.0.0.0".to_string(),
            max_request_body_size: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", work_dir().join("folio.db").display()),
            max_connections: 10,
            min_connections: 1,
            sqlx_logging: false,
        }
    }
}

impl DatabaseConfig {
    pub fn connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            url: self.url.clone(),
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            sqlx_logging: self.sqlx_logging,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 上传文件根目录
    pub root: PathBuf,
    /// 对外访问文件的URL前缀
    pub public_prefix: String,
    /// 项目图片上限（字节）
    pub max_image_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: work_dir().join("storage"),
            public_prefix: "/storage".to_string(),
            max_image_size: 4 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 未设置RUST_LOG时使用的过滤规则
    pub level: String,
    /// 输出JSON格式日志
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

fn work_dir() -> PathBuf {
    let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home_dir.join(".folio")
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // 如果存在.env文件，先加载到环境变量
        dotenv::dotenv().ok();

        let config_path = work_dir().join("folio.toml");

        let config = config::Config::builder()
            .add_source(config::File::with_name("folio.toml").required(false))
            .add_source(config::File::from(config_path.as_path()).required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;
        config.try_deserialize()
    }
}
