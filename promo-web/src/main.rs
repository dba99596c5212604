mod config;
mod handlers;
mod locks;
mod routes;
mod views;


use crate::{config::ServerConfig, locks::PartnerLocks};
use axum::Router;
use promo::{
    domain::{Config, PartnerStore},
    policy::LimitPolicy,
    store::MemoryStore,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_appender::non_blocking;
use tracing_subscriber::fmt;

/// 服务共享状态
pub struct AppState<S: PartnerStore> {
    pub policy: LimitPolicy<S>,
    pub locks: PartnerLocks,
}

impl<S: PartnerStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            policy: LimitPolicy::new(store),
            locks: PartnerLocks::new(),
        }
    }
}

#[tokio::main]
async fn main() {
    let (non_blocking, _guard) = non_blocking(std::io::stdout());
    fmt()
        .with_writer(non_blocking)
        .with_target(false)
        .pretty()
        .init();

    let cfg = match ServerConfig::get() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("加载服务配置失败：{e}");
            return;
        }
    };

    let store = MemoryStore::new();
    for seed in &cfg.partners {
        store.insert(seed.to_partner()).await;
    }
    info!("已载入 {} 个合作伙伴", cfg.partners.len());

    let svc = Arc::new(AppState::new(store));
    let app = Router::new().merge(routes::partner_routes().with_state(svc));

    let addr = cfg.server.addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("绑定地址 {addr} 失败：{e}");
            return;
        }
    };
    info!("服务监听 {addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("服务异常退出：{e}");
    }
    info!("优雅退出完成");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("收到 Ctrl-C 信号"),
            Err(e) => {
                error!("监听 Ctrl-C 信号失败：{e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("收到 SIGTERM 信号");
            }
            Err(e) => {
                error!("监听 SIGTERM 信号失败：{e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("开始优雅退出");
}
