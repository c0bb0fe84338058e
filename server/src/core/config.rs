use crate::auth::JwtConfig;

/// SMTP 邮件配置
///
/// 未设置 SMTP_HOST 时邮件通知整体关闭 (开发环境默认)。
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// 发件人地址, 如 "HR <hr@example.com>"
    pub from: String,
}

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_PATH | hr.db | SQLite 数据库文件 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_DIR | (未设置) | 日志目录, 设置后写入滚动文件 |
/// | SMTP_HOST | (未设置) | SMTP 服务器, 未设置则不发邮件 |
/// | SMTP_PORT | 587 | SMTP 端口 (STARTTLS) |
/// | SMTP_USERNAME / SMTP_PASSWORD | (空) | SMTP 凭据 |
/// | SMTP_FROM | hr@localhost | 发件人地址 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/hr.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志目录 (None 则仅输出到 stdout)
    pub log_dir: Option<String>,
    /// SMTP 配置 (None 则不发送邮件)
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let smtp = std::env::var("SMTP_HOST").ok().map(|host| SmtpConfig {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
            password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            from: std::env::var("SMTP_FROM").unwrap_or_else(|_| "hr@localhost".into()),
        });

        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "hr.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            smtp,
        }
    }

}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
