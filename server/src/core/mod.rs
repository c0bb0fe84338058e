//! 核心模块
//!
//! 配置、服务器状态和启动逻辑

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, SmtpConfig};
pub use server::Server;
pub use state::ServerState;
