//! Attendance API Module

mod handler;

use axum::{Router, middleware, routing::delete, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/attendances", routes())
}

fn routes() -> Router<ServerState> {
    // 创建/读取/更新: 员工可操作自己的记录, handler 内做范围检查
    let scoped_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update));

    // 删除: 仅管理员
    let manage_routes = Router::new()
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    scoped_routes.merge(manage_routes)
}
