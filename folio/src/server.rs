use crate::config::Config;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use folio_web::AppState;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// 创建应用路由
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(folio_web::health_check))
        // 管理后台
        .nest("/admin", folio_web::admin_routes())
        // 上传文件的公开访问
        .nest_service(
            &config.storage.public_prefix,
            ServeDir::new(&config.storage.root),
        )
        .layer(DefaultBodyLimit::max(config.server.max_request_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
