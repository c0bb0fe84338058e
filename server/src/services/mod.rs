//! 业务服务模块

pub mod email;

pub use email::EmailService;
