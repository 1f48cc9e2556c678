mod config;
mod error;
mod server;

use config::Config;
use error::Result;
use folio_infra::{BlobStore, DatabaseManager, LocalBlobStore};
use folio_web::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use axum::serve;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志，RUST_LOG优先于配置文件
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    if config.logging.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting Folio application...");

    // 初始化数据库连接并执行迁移
    let db_manager = DatabaseManager::connect(&config.database.connection_settings()).await?;
    db_manager.migrate().await?;

    // 初始化文件存储
    tokio::fs::create_dir_all(&config.storage.root).await?;
    let blob_store: Arc<dyn BlobStore> = Arc::new(LocalBlobStore::new(config.storage.root.clone()));
    info!("Blob storage at {}", config.storage.root.display());

    // 初始化应用状态
    let app_state = AppState::new(db_manager.connection(), blob_store, config.storage.max_image_size);

    // 创建路由
    let app = server::create_router(app_state, &config);

    // 启动HTTP服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    serve(listener, app.into_make_service())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
