//! HR Server - 人事管理后端
//!
//! # 架构概述
//!
//! 围绕一个月度日历聚合引擎构建的 HR 管理 API：
//!
//! - **日历聚合** (`calendar`): 把考勤打卡和已批准请假折叠成按天分类的
//!   月视图，工资计算和统计接口共用同一套规则
//! - **数据库** (`db`): SQLite (sqlx) 存储、模型与仓储层
//! - **认证** (`auth`): JWT + Argon2 认证体系, admin/employee 两级角色
//! - **HTTP API** (`api`): RESTful API 接口
//! - **报表** (`reports`): Excel / PDF 导出
//! - **通知** (`services`): SMTP 邮件通知
//!
//! # 模块结构
//!
//! ```text
//! server/src/
//! ├── core/          # 配置、状态、启动
//! ├── auth/          # JWT 认证、角色
//! ├── calendar/      # 月度日历聚合引擎
//! ├── db/            # 模型与仓储层
//! ├── api/           # HTTP 路由和处理器
//! ├── reports/       # Excel / PDF 报表
//! ├── services/      # 邮件通知
//! └── utils/         # 错误、日志、验证
//! ```

pub mod api;
pub mod auth;
pub mod calendar;
pub mod core;
pub mod db;
pub mod reports;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use calendar::{DayStatus, MonthlyAggregate};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(None, log_dir.as_deref());
}
