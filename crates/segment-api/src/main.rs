//! 联系人分群 API 服务入口
//!
//! 提供规则评估、命名规则管理与健康检查的 REST API。

use rule_engine::RuleEngine;
use segment_api::{
    config::{AppConfig, DEFAULT_TOKEN},
    observability, routes,
    state::AppState,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("segment-api").unwrap_or_default();

    observability::init(&config.observability);

    info!("Starting segment-api on {}", config.server_addr());

    // 生产环境必须注入真实 Token
    if config.auth.token == DEFAULT_TOKEN {
        if config.is_production() {
            anyhow::bail!("SEGMENT_AUTH_TOKEN must be set in production environment");
        }
        warn!("Using default auth token - set SEGMENT_AUTH_TOKEN for production");
    }

    // 数据集启动时加载一次，进程生命周期内只读
    let engine = RuleEngine::with_builtin_dataset();
    info!(contacts_loaded = engine.contacts().len(), "联系人数据集已加载");

    let state = AppState::new(engine, config.auth.token.clone());
    let app = routes::app(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：停止接收新连接并等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
///
/// 收到 SIGTERM 或 Ctrl+C 后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
