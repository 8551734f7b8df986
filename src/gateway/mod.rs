//! Gateway 应用层
//!
//! HTTP 服务器和请求处理

mod handlers;
mod middleware;
mod state;

pub use state::AppState;

use anyhow::{Context, Result};
use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;
use crate::providers;

/// 评审路由挂载的前缀
pub const REVIEW_PREFIX: &str = "/ai";
/// 评审接口相对于前缀的路径
pub const REVIEW_PATH: &str = "/get-review";

pub async fn serve(config: Config) -> Result<()> {
    let provider = providers::create_provider(&config)?;
    let state = AppState::new(provider);
    let app = build_router(state, Duration::from_secs(config.request_timeout_secs));
    let addr = listen_addr(&config)?;
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// 解析监听地址，IPv6 地址可带或不带方括号
fn listen_addr(config: &Config) -> Result<SocketAddr> {
    let host = config.host.trim_start_matches('[').trim_end_matches(']');
    let ip: IpAddr = host
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.host))?;
    Ok(SocketAddr::new(ip, config.port))
}

fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let review_routes = Router::new().route(REVIEW_PATH, post(handlers::handle_get_review));

    Router::new()
        .route("/", get(handlers::handle_home))
        .nest(REVIEW_PREFIX, review_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_logger))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    tokio::select! {
        _ = ctrl_c => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
