use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::EmailService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | mailer | Option<EmailService> | SMTP 邮件服务 (可选) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 邮件通知服务, 未配置 SMTP 时为 None
    pub mailer: Option<EmailService>,
}

impl ServerState {
    /// 根据配置初始化所有服务
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let mailer = match &config.smtp {
            Some(smtp) => Some(EmailService::new(smtp)?),
            None => {
                tracing::info!("SMTP not configured, email notifications disabled");
                None
            }
        };

        Ok(Self {
            config: config.clone(),
            db,
            jwt_service,
            mailer,
        })
    }

    /// 使用内存数据库初始化 (测试)
    pub async fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new_in_memory().await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config: config.clone(),
            db,
            jwt_service,
            mailer: None,
        })
    }

    /// 获取数据库连接池
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
