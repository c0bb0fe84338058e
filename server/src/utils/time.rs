//! 时间工具函数
//!
//! 日期/时间解析由 serde 在请求反序列化时完成,
//! repository 层只接收已验证的 `NaiveDate` / `NaiveTime`。

use chrono::{NaiveDate, Utc};

/// 当前日期 (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
