use folio_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use std::time::Duration;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// 数据库连接参数
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
}

impl ConnectionSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            sqlx_logging: false,
        }
    }
}

/// DatabaseManager 管理主数据库连接
#[derive(Clone)]
pub struct DatabaseManager {
    db: Arc<DatabaseConnection>,
}

impl DatabaseManager {
    /// 建立连接池
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(settings.url.clone());
        options
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(settings.sqlx_logging);

        let db = Database::connect(options).await?;
        tracing::info!("Database connection established: {}", redact(&settings.url));
        Ok(Self { db: Arc::new(db) })
    }

    /// 内存SQLite数据库（单连接，已执行迁移），用于测试
    pub async fn in_memory() -> Result<Self, DbErr> {
        let mut settings = ConnectionSettings::new(IN_MEMORY_URL);
        // 内存数据库每个连接相互独立，只能使用一个连接
        settings.max_connections = 1;
        let manager = Self::connect(&settings).await?;
        manager.migrate().await?;
        Ok(manager)
    }

    /// 执行所有未应用的迁移
    pub async fn migrate(&self) -> Result<(), DbErr> {
        Migrator::up(&*self.db, None).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// 获取数据库连接
    pub fn connection(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }
}

/// 隐藏连接串中的密码
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let credentials = &url[scheme_end + 3..at];
            match credentials.split_once(':') {
                Some((user, _)) => format!("{}{}:***{}", &url[..scheme_end + 3], user, &url[at..]),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}
