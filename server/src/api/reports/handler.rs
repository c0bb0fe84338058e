//! Report Export Handlers
//!
//! 报表在内存中渲染, 以附件形式返回字节流。

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, header},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::PayrollFilter;
use crate::db::repository::{attendance, employee, payroll};
use crate::reports;
use crate::utils::{AppError, AppResult};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PDF_MIME: &str = "application/pdf";

fn attachment_headers(mime: &'static str, filename: &str) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|e| AppError::internal(format!("Invalid header value: {e}")))?,
    );
    Ok(headers)
}

/// Full payroll table as Excel (admin)
pub async fn payroll_excel(State(state): State<ServerState>) -> AppResult<impl IntoResponse> {
    let payrolls = payroll::find_all_for_export(state.pool()).await?;
    let bytes = reports::payroll_excel(&payrolls)?;
    Ok((attachment_headers(XLSX_MIME, "payroll.xlsx")?, bytes))
}

/// Full payroll table as PDF (admin)
pub async fn payroll_pdf(State(state): State<ServerState>) -> AppResult<impl IntoResponse> {
    let payrolls = payroll::find_all_for_export(state.pool()).await?;
    let bytes = reports::payroll_pdf(&payrolls)?;
    Ok((attachment_headers(PDF_MIME, "payroll.pdf")?, bytes))
}

/// Full attendance table as Excel (admin)
pub async fn attendance_excel(State(state): State<ServerState>) -> AppResult<impl IntoResponse> {
    let records = attendance::find_all_for_export(state.pool()).await?;
    let bytes = reports::attendance_excel(&records)?;
    Ok((attachment_headers(XLSX_MIME, "attendance.xlsx")?, bytes))
}

#[derive(Debug, Deserialize)]
pub struct SlipQuery {
    pub employee_id: i64,
    pub year: i64,
    pub month: i64,
}

/// Single payslip PDF
///
/// 员工只能导出自己的工资条, 管理员不受限。
pub async fn payroll_slip_pdf(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<SlipQuery>,
) -> AppResult<impl IntoResponse> {
    user.require_self_or_admin(query.employee_id)?;

    let emp = employee::get(state.pool(), query.employee_id).await?;

    let filter = PayrollFilter {
        employee_id: Some(query.employee_id),
        year: Some(query.year),
        month: Some(query.month),
    };
    let record = payroll::find_all(state.pool(), &filter)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Payroll for employee {} in {}/{} not found",
                query.employee_id, query.month, query.year
            ))
        })?;

    let bytes = reports::payroll_slip_pdf(&record, &emp.full_name)?;
    let filename = format!("payslip-{}-{}-{}.pdf", query.employee_id, query.year, query.month);
    Ok((attachment_headers(PDF_MIME, &filename)?, bytes))
}
