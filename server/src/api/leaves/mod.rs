//! Leave Request API Module

mod handler;

use axum::{Router, middleware, routing::delete, routing::get, routing::post, routing::put};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/leaves", routes())
}

fn routes() -> Router<ServerState> {
    // 匿名提交通道, 认证中间件放行该路径
    let public_routes = Router::new().route("/public", post(handler::create_public));

    let scoped_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update));

    // 审批和删除: 仅管理员
    let manage_routes = Router::new()
        .route("/{id}/approve", put(handler::approve))
        .route("/{id}/reject", put(handler::reject))
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    public_routes.merge(scoped_routes).merge(manage_routes)
}
