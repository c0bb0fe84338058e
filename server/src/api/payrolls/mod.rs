//! Payroll API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/payrolls", routes())
}

fn routes() -> Router<ServerState> {
    // 列表/单条: 员工只能看自己的, handler 内做范围检查
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    // 计算并入账: 仅管理员
    let manage_routes = Router::new()
        .route("/calculate", post(handler::calculate))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes)
}
