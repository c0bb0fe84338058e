//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | / | GET | 存活检查 | 无 |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

/// 存活检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "HR API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
