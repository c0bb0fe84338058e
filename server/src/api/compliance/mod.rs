//! Compliance Policy API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/compliance", routes())
}

fn routes() -> Router<ServerState> {
    // 员工侧: 查看生效政策 + 签收
    let employee_routes = Router::new()
        .route("/my-policies", get(handler::my_policies))
        .route("/policies/{id}/acknowledge", post(handler::acknowledge));

    // 政策管理: 仅管理员
    let manage_routes = Router::new()
        .route("/policies", get(handler::list_policies).post(handler::create_policy))
        .route(
            "/policies/{id}",
            get(handler::get_policy)
                .put(handler::update_policy)
                .delete(handler::delete_policy),
        )
        .route(
            "/policies/{id}/acknowledgements",
            get(handler::list_acknowledgements),
        )
        .layer(middleware::from_fn(require_admin));

    employee_routes.merge(manage_routes)
}
