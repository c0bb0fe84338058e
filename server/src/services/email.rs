//! 邮件通知服务
//!
//! 通过 SMTP (STARTTLS) 发送纯文本通知邮件。发送失败只记录日志,
//! 不影响触发它的 API 请求。

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::utils::{AppError, AppResult};

/// SMTP 邮件服务
#[derive(Clone)]
pub struct EmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl EmailService {
    pub fn new(config: &crate::core::SmtpConfig) -> AppResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::internal(format!("SMTP transport error: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }

    /// 发送纯文本邮件 (后台任务, 不阻塞调用方)
    ///
    /// 收件人地址无效或发送失败时只记 WARN 日志。
    pub fn send_in_background(&self, to: &str, subject: String, body: String) {
        let Ok(from) = self.from.parse() else {
            tracing::warn!(from = %self.from, "Invalid SMTP from address, skipping email");
            return;
        };
        let Ok(to_mailbox) = to.parse() else {
            tracing::warn!(to, "Invalid recipient address, skipping email");
            return;
        };

        let message = Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(&subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body);

        let message = match message {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build email message");
                return;
            }
        };

        let transport = self.transport.clone();
        let to = to.to_string();
        tokio::spawn(async move {
            match transport.send(message).await {
                Ok(_) => tracing::info!(%to, %subject, "Email sent"),
                Err(e) => tracing::warn!(%to, error = %e, "Failed to send email"),
            }
        });
    }

    /// 请假状态变更通知
    pub fn send_leave_status_email(
        &self,
        employee_email: Option<&str>,
        employee_name: &str,
        leave_id: i64,
        status: &str,
    ) {
        let Some(to) = employee_email else {
            tracing::info!(employee_name, "Employee has no email, skipping notification");
            return;
        };

        let status_text = match status {
            "approved" => "approved".to_string(),
            "rejected" => "rejected".to_string(),
            other => format!("moved to status: {other}"),
        };

        let subject = format!("[HR] Leave request #{leave_id} update");
        let body = format!(
            "Hello {employee_name},\n\n\
             Your leave request #{leave_id} has been {status_text}.\n\
             Please log in to the system for details.\n\n\
             Best regards,\n\
             Human Resources"
        );
        self.send_in_background(to, subject, body);
    }

    /// 工资单生成通知
    pub fn send_payroll_email(
        &self,
        employee_email: Option<&str>,
        employee_name: &str,
        year: i32,
        month: u32,
        net_salary: f64,
    ) {
        let Some(to) = employee_email else {
            tracing::info!(employee_name, "Employee has no email, skipping notification");
            return;
        };

        let subject = format!("[HR] Payslip for {month}/{year}");
        let body = format!(
            "Hello {employee_name},\n\n\
             Your payslip for {month}/{year} has been generated.\n\
              - Net salary: {net_salary:.0}\n\n\
             Please log in to the system for details.\n\n\
             Best regards,\n\
             Human Resources"
        );
        self.send_in_background(to, subject, body);
    }
}
