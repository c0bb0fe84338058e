//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/employees", routes())
}

fn routes() -> Router<ServerState> {
    // 读取单条: 员工可看自己的记录, 权限在 handler 内检查
    let read_routes = Router::new().route("/{id}", get(handler::get_by_id));

    // 列表和写操作: 仅管理员
    let manage_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes)
}
