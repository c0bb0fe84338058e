//! 报表导出
//!
//! 在内存中渲染 Excel / PDF 报表, 处理函数直接把字节流写回响应。

use printpdf::{BuiltinFont, Mm, PdfDocument};
use rust_xlsxwriter::Workbook;

use crate::db::models::{Attendance, Payroll};
use crate::utils::{AppError, AppResult};

/// 工资表 Excel
pub fn payroll_excel(payrolls: &[Payroll]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Payroll")
        .map_err(|e| AppError::internal(format!("Excel error: {e}")))?;

    let headers = [
        "ID",
        "Employee",
        "Month",
        "Year",
        "Attendance days",
        "Daily salary",
        "Gross salary",
        "Deductions",
        "Net salary",
    ];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write(0, col as u16, *header)
            .map_err(|e| AppError::internal(format!("Excel error: {e}")))?;
    }

    for (i, p) in payrolls.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet
            .write(row, 0, p.id as f64)
            .and_then(|ws| ws.write(row, 1, p.employee_id as f64))
            .and_then(|ws| ws.write(row, 2, p.month as f64))
            .and_then(|ws| ws.write(row, 3, p.year as f64))
            .and_then(|ws| ws.write(row, 4, p.attendance_days as f64))
            .and_then(|ws| ws.write(row, 5, p.base_daily_salary))
            .and_then(|ws| ws.write(row, 6, p.gross_salary))
            .and_then(|ws| ws.write(row, 7, p.deductions))
            .and_then(|ws| ws.write(row, 8, p.net_salary))
            .map_err(|e| AppError::internal(format!("Excel error: {e}")))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::internal(format!("Excel error: {e}")))
}

/// 考勤表 Excel
///
/// 状态列由 check_in 推导: 有打卡即 Present, 否则 Absent。
pub fn attendance_excel(records: &[Attendance]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Attendance")
        .map_err(|e| AppError::internal(format!("Excel error: {e}")))?;

    let headers = ["ID", "Employee", "Date", "Check in", "Check out", "Status"];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write(0, col as u16, *header)
            .map_err(|e| AppError::internal(format!("Excel error: {e}")))?;
    }

    for (i, a) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let status = if a.check_in.is_some() {
            "Present"
        } else {
            "Absent"
        };
        worksheet
            .write(row, 0, a.id as f64)
            .and_then(|ws| ws.write(row, 1, a.employee_id as f64))
            .and_then(|ws| ws.write(row, 2, a.date.to_string()))
            .and_then(|ws| {
                ws.write(
                    row,
                    3,
                    a.check_in.map(|t| t.to_string()).unwrap_or_default(),
                )
            })
            .and_then(|ws| {
                ws.write(
                    row,
                    4,
                    a.check_out.map(|t| t.to_string()).unwrap_or_default(),
                )
            })
            .and_then(|ws| ws.write(row, 5, status))
            .map_err(|e| AppError::internal(format!("Excel error: {e}")))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::internal(format!("Excel error: {e}")))
}

// A4 页面, 顶部标题, 每行一条记录, 接近页底时换页
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const TOP_Y_MM: f32 = 282.0;
const BOTTOM_Y_MM: f32 = 18.0;
const LINE_STEP_MM: f32 = 7.0;

/// 工资表 PDF
pub fn payroll_pdf(payrolls: &[Payroll]) -> AppResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Payroll report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::internal(format!("PDF error: {e}")))?;

    let mut current = doc.get_page(page).get_layer(layer);
    current.use_text("EMPLOYEE PAYROLL", 12.0, Mm(75.0), Mm(TOP_Y_MM), &font);
    let mut y = TOP_Y_MM - 2.0 * LINE_STEP_MM;

    for p in payrolls {
        let line = format!(
            "Employee {} | {}/{} | Net salary: {:.0}",
            p.employee_id, p.month, p.year, p.net_salary
        );
        current.use_text(line, 10.0, Mm(18.0), Mm(y), &font);
        y -= LINE_STEP_MM;

        if y < BOTTOM_Y_MM {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_Y_MM;
        }
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::internal(format!("PDF error: {e}")))
}

/// 单人工资条 PDF
pub fn payroll_slip_pdf(payroll: &Payroll, employee_name: &str) -> AppResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Payslip",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::internal(format!("PDF error: {e}")))?;
    let current = doc.get_page(page).get_layer(layer);

    let lines = [
        format!("PAYSLIP {}/{}", payroll.month, payroll.year),
        format!("Employee: {employee_name} (#{})", payroll.employee_id),
        format!("Daily salary: {:.0}", payroll.base_daily_salary),
        format!("Attendance days: {}", payroll.attendance_days),
        format!("Paid leave days: {}", payroll.paid_leave_days),
        format!("Gross salary: {:.0}", payroll.gross_salary),
        format!("Deductions: {:.0}", payroll.deductions),
        format!("Net salary: {:.0}", payroll.net_salary),
    ];

    let mut y = TOP_Y_MM;
    for (i, line) in lines.iter().enumerate() {
        let size = if i == 0 { 14.0 } else { 10.0 };
        current.use_text(line, size, Mm(18.0), Mm(y), &font);
        y -= LINE_STEP_MM * if i == 0 { 2.0 } else { 1.0 };
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::internal(format!("PDF error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    fn sample_payroll(id: i64) -> Payroll {
        Payroll {
            id,
            employee_id: id,
            year: 2025,
            month: 3,
            base_daily_salary: 500_000.0,
            attendance_days: 20,
            paid_leave_days: 2,
            gross_salary: 11_000_000.0,
            deductions: 0.0,
            net_salary: 11_000_000.0,
            created_at: Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn payroll_excel_renders_bytes() {
        let bytes = payroll_excel(&[sample_payroll(1), sample_payroll(2)]).unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn attendance_excel_renders_bytes() {
        let record = Attendance {
            id: 1,
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            check_in: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            check_out: None,
        };
        let bytes = attendance_excel(&[record]).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn payroll_slip_pdf_renders_bytes() {
        let bytes = payroll_slip_pdf(&sample_payroll(1), "Alice Nguyen").unwrap();
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn payroll_pdf_renders_and_paginates() {
        // Enough rows to force a second page
        let rows: Vec<Payroll> = (1..=60).map(sample_payroll).collect();
        let bytes = payroll_pdf(&rows).unwrap();
        assert_eq!(&bytes[0..5], b"%PDF-");
    }
}
