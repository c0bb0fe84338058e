//! Dashboard API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/dashboard", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/overview", get(handler::overview))
        .layer(middleware::from_fn(require_admin))
}
