//! Statistics API Module
//!
//! | 路径 | 方法 | 说明 | 角色 |
//! |------|------|------|------|
//! | /stats/overview | GET | 系统总览 | admin |
//! | /stats/attendance-summary | GET | 按月出勤汇总 | admin |
//! | /stats/leave-summary | GET | 按月请假汇总 | admin |
//! | /stats/attendance-heatmap | GET | 单人月度日历 | admin |
//! | /stats/my-attendance-calendar | GET | 本人月度日历 | employee |

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/stats", routes())
}

fn routes() -> Router<ServerState> {
    let self_routes =
        Router::new().route("/my-attendance-calendar", get(handler::my_attendance_calendar));

    let admin_routes = Router::new()
        .route("/overview", get(handler::overview))
        .route("/attendance-summary", get(handler::attendance_summary))
        .route("/leave-summary", get(handler::leave_summary))
        .route("/attendance-heatmap", get(handler::attendance_heatmap))
        .layer(middleware::from_fn(require_admin));

    self_routes.merge(admin_routes)
}
