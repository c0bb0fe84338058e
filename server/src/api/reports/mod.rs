//! Report Export API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/reports", routes())
}

fn routes() -> Router<ServerState> {
    // 个人工资条: 员工可导出自己的, handler 内做范围检查
    let self_routes = Router::new().route("/payroll-slip-pdf", get(handler::payroll_slip_pdf));

    let admin_routes = Router::new()
        .route("/payroll-excel", get(handler::payroll_excel))
        .route("/payroll-pdf", get(handler::payroll_pdf))
        .route("/attendance-excel", get(handler::attendance_excel))
        .layer(middleware::from_fn(require_admin));

    self_routes.merge(admin_routes)
}
