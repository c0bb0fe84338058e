//! Performance Review API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/performance-reviews", routes())
}

fn routes() -> Router<ServerState> {
    // 读取: 员工自动限定到自己的评估
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    // 写操作: 仅管理员
    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes)
}
