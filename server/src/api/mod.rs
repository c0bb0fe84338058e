//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`employees`] - 员工档案接口
//! - [`attendances`] - 考勤打卡接口
//! - [`leaves`] - 请假流程接口
//! - [`payrolls`] - 工资计算接口
//! - [`performance_reviews`] - 绩效评估接口
//! - [`compliance`] - 合规政策接口
//! - [`stats`] - 统计与月度日历接口
//! - [`dashboard`] - 管理面板接口
//! - [`reports`] - 报表导出接口
//! - [`users`] - 账户管理接口

pub mod auth;
pub mod health;

pub mod attendances;
pub mod compliance;
pub mod dashboard;
pub mod employees;
pub mod leaves;
pub mod payrolls;
pub mod performance_reviews;
pub mod reports;
pub mod stats;
pub mod users;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(employees::router())
        .merge(attendances::router())
        .merge(leaves::router())
        .merge(payrolls::router())
        .merge(performance_reviews::router())
        .merge(compliance::router())
        .merge(stats::router())
        .merge(dashboard::router())
        .merge(reports::router())
        .merge(users::router())
}

/// Assemble the full application with middleware
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // JWT 认证中间件 - require_auth 内部会跳过公共路由
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
