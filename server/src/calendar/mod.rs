//! Calendar Aggregation Engine
//!
//! 月度日历聚合: 把出勤打卡和已批准请假折叠成按天分类的月视图,
//! 并从同一份输入推导出勤天数和带薪假天数。
//!
//! Day classification precedence (first match wins):
//! present > paid_leave > future > weekend > absent_unexcused

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeSet;

use crate::db::repository::{RepoError, RepoResult, attendance, employee, leave_request};

/// Classification of a single calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// At least one check-in recorded on this date
    Present,
    /// Covered by an approved leave request
    PaidLeave,
    /// After the reference date, not yet classifiable
    Future,
    /// Saturday or Sunday with no presence or leave
    Weekend,
    /// Working day in the past with no presence or leave
    AbsentUnexcused,
}

/// One classified day in the month view
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Full aggregation result for one employee-month
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyAggregate {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayEntry>,
    /// Distinct dates with a recorded check-in
    pub attendance_days: u32,
    /// Sum of per-request clamped inclusive lengths. Overlapping approved
    /// requests each contribute their full clamped length, so a date covered
    /// twice counts twice here even though it classifies as a single
    /// `PaidLeave` day above.
    pub paid_leave_days: u32,
    pub absent_days: u32,
    pub weekend_days: u32,
    pub future_days: u32,
}

/// First and last day of a month. 传入的 month 必须在 1..=12.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next_first.pred_opt()?;
    Some((first, last))
}

/// Clamp an inclusive date interval to the month. Returns `None` when the
/// interval does not intersect the month at all.
pub fn clamp_to_month(
    start: NaiveDate,
    end: NaiveDate,
    first: NaiveDate,
    last: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    let s = start.max(first);
    let e = end.min(last);
    if s > e { None } else { Some((s, e)) }
}

/// Inclusive length of a date interval in days
fn interval_len(start: NaiveDate, end: NaiveDate) -> u32 {
    (end - start).num_days() as u32 + 1
}

/// Pure aggregation over one month.
///
/// * `present_days` - distinct dates with a check-in (any date outside the
///   month is ignored)
/// * `approved_leaves` - inclusive `(start, end)` intervals of approved
///   leave requests, not yet clamped
/// * `today` - reference date for the future/past split
pub fn aggregate_month(
    year: i32,
    month: u32,
    today: NaiveDate,
    present_days: &BTreeSet<NaiveDate>,
    approved_leaves: &[(NaiveDate, NaiveDate)],
) -> Option<MonthlyAggregate> {
    let (first, last) = month_bounds(year, month)?;

    // Clamp each request; per-request lengths sum WITHOUT de-duplication
    let mut leave_dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut paid_leave_days: u32 = 0;
    for &(start, end) in approved_leaves {
        if let Some((s, e)) = clamp_to_month(start, end, first, last) {
            paid_leave_days += interval_len(s, e);
            let mut d = s;
            while d <= e {
                leave_dates.insert(d);
                d = d.checked_add_days(Days::new(1))?;
            }
        }
    }

    let mut days = Vec::with_capacity(interval_len(first, last) as usize);
    let mut attendance_days = 0u32;
    let mut absent_days = 0u32;
    let mut weekend_days = 0u32;
    let mut future_days = 0u32;

    let mut date = first;
    while date <= last {
        let status = if present_days.contains(&date) {
            attendance_days += 1;
            DayStatus::Present
        } else if leave_dates.contains(&date) {
            DayStatus::PaidLeave
        } else if date > today {
            future_days += 1;
            DayStatus::Future
        } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            weekend_days += 1;
            DayStatus::Weekend
        } else {
            absent_days += 1;
            DayStatus::AbsentUnexcused
        };
        days.push(DayEntry { date, status });
        date = date.checked_add_days(Days::new(1))?;
    }

    Some(MonthlyAggregate {
        year,
        month,
        days,
        attendance_days,
        paid_leave_days,
        absent_days,
        weekend_days,
        future_days,
    })
}

/// Load one employee-month from the database and aggregate it.
///
/// Fails not-found when the employee row is gone; a token can outlive the
/// employee record it points at, and a deleted employee must not get an
/// empty calendar back.
pub async fn monthly_aggregate_for(
    pool: &SqlitePool,
    employee_id: i64,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> RepoResult<Option<MonthlyAggregate>> {
    if employee::find_by_id(pool, employee_id).await?.is_none() {
        return Err(RepoError::NotFound(format!(
            "Employee {employee_id} not found"
        )));
    }

    let Some((first, last)) = month_bounds(year, month) else {
        return Ok(None);
    };

    let present: BTreeSet<NaiveDate> = attendance::present_dates(pool, employee_id, first, last)
        .await?
        .into_iter()
        .collect();
    let leaves = leave_request::approved_overlapping(pool, employee_id, first, last).await?;

    Ok(aggregate_month(year, month, today, &present, &leaves))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_bounds_regular_and_leap() {
        assert_eq!(
            month_bounds(2025, 3),
            Some((d(2025, 3, 1), d(2025, 3, 31)))
        );
        assert_eq!(
            month_bounds(2025, 2),
            Some((d(2025, 2, 1), d(2025, 2, 28)))
        );
        // Leap year February
        assert_eq!(
            month_bounds(2024, 2),
            Some((d(2024, 2, 1), d(2024, 2, 29)))
        );
        // December rolls into next year
        assert_eq!(
            month_bounds(2025, 12),
            Some((d(2025, 12, 1), d(2025, 12, 31)))
        );
        assert_eq!(month_bounds(2025, 13), None);
        assert_eq!(month_bounds(2025, 0), None);
    }

    #[test]
    fn clamp_trims_both_ends() {
        let (first, last) = month_bounds(2025, 3).unwrap();
        // Straddles the start of the month
        assert_eq!(
            clamp_to_month(d(2025, 2, 26), d(2025, 3, 4), first, last),
            Some((d(2025, 3, 1), d(2025, 3, 4)))
        );
        // Straddles the end
        assert_eq!(
            clamp_to_month(d(2025, 3, 29), d(2025, 4, 2), first, last),
            Some((d(2025, 3, 29), d(2025, 3, 31)))
        );
        // Entirely outside
        assert_eq!(
            clamp_to_month(d(2025, 4, 1), d(2025, 4, 5), first, last),
            None
        );
    }

    #[test]
    fn classification_precedence() {
        // 2025-03-01 is a Saturday
        let today = d(2025, 3, 15);
        let present: BTreeSet<NaiveDate> =
            [d(2025, 3, 3), d(2025, 3, 8), d(2025, 3, 10)].into_iter().collect();
        // Leave covers 10..=12: the 10th has a check-in, present wins
        let leaves = vec![(d(2025, 3, 10), d(2025, 3, 12))];

        let agg = aggregate_month(2025, 3, today, &present, &leaves).unwrap();
        let status_on = |day: u32| {
            agg.days
                .iter()
                .find(|e| e.date == d(2025, 3, day))
                .unwrap()
                .status
        };

        assert_eq!(status_on(3), DayStatus::Present);
        // Present on a Saturday beats weekend
        assert_eq!(status_on(8), DayStatus::Present);
        // Present beats paid leave
        assert_eq!(status_on(10), DayStatus::Present);
        assert_eq!(status_on(11), DayStatus::PaidLeave);
        assert_eq!(status_on(12), DayStatus::PaidLeave);
        // Working day in the past, nothing recorded
        assert_eq!(status_on(4), DayStatus::AbsentUnexcused);
        // Saturday without presence
        assert_eq!(status_on(1), DayStatus::Weekend);
        // After the reference date
        assert_eq!(status_on(16), DayStatus::Future);
        // The 15th itself is "today": not future (it is a Saturday)
        assert_eq!(status_on(15), DayStatus::Weekend);

        assert_eq!(agg.days.len(), 31);
        assert_eq!(agg.attendance_days, 3);
        assert_eq!(agg.paid_leave_days, 3);
    }

    #[test]
    fn overlapping_leaves_double_count_in_total_but_not_in_days() {
        let today = d(2025, 3, 31);
        let present = BTreeSet::new();
        // Two approved requests both covering the 11th
        let leaves = vec![
            (d(2025, 3, 10), d(2025, 3, 11)),
            (d(2025, 3, 11), d(2025, 3, 12)),
        ];

        let agg = aggregate_month(2025, 3, today, &present, &leaves).unwrap();
        // 2 + 2, the shared day counted twice
        assert_eq!(agg.paid_leave_days, 4);
        // ...but the calendar shows three paid-leave days
        let leave_entries = agg
            .days
            .iter()
            .filter(|e| e.status == DayStatus::PaidLeave)
            .count();
        assert_eq!(leave_entries, 3);
    }

    #[test]
    fn leave_clamped_at_month_edges() {
        let today = d(2025, 3, 31);
        let present = BTreeSet::new();
        let leaves = vec![(d(2025, 2, 27), d(2025, 3, 2))];

        let agg = aggregate_month(2025, 3, today, &present, &leaves).unwrap();
        // Only 03-01 and 03-02 fall inside the month
        assert_eq!(agg.paid_leave_days, 2);
        assert_eq!(agg.days[0].status, DayStatus::PaidLeave);
        assert_eq!(agg.days[1].status, DayStatus::PaidLeave);
    }

    #[test]
    fn future_month_is_all_future() {
        let today = d(2025, 3, 15);
        let agg = aggregate_month(2025, 4, today, &BTreeSet::new(), &[]).unwrap();
        assert_eq!(agg.future_days, 30);
        assert_eq!(agg.absent_days, 0);
        assert_eq!(agg.weekend_days, 0);
    }

    #[test]
    fn presence_outside_month_is_ignored() {
        let today = d(2025, 3, 31);
        let present: BTreeSet<NaiveDate> =
            [d(2025, 2, 28), d(2025, 3, 3)].into_iter().collect();
        let agg = aggregate_month(2025, 3, today, &present, &[]).unwrap();
        assert_eq!(agg.attendance_days, 1);
    }

    #[test]
    fn counters_sum_to_month_length() {
        let today = d(2025, 3, 15);
        let present: BTreeSet<NaiveDate> =
            [d(2025, 3, 3), d(2025, 3, 4)].into_iter().collect();
        let leaves = vec![(d(2025, 3, 6), d(2025, 3, 7))];
        let agg = aggregate_month(2025, 3, today, &present, &leaves).unwrap();

        let leave_entries = agg
            .days
            .iter()
            .filter(|e| e.status == DayStatus::PaidLeave)
            .count() as u32;
        assert_eq!(
            agg.attendance_days
                + leave_entries
                + agg.absent_days
                + agg.weekend_days
                + agg.future_days,
            31
        );
    }

    #[tokio::test]
    async fn aggregate_for_missing_employee_is_not_found() {
        let db = crate::db::DbService::new_in_memory().await.unwrap();

        let err = monthly_aggregate_for(&db.pool, 42, 2025, 3, d(2025, 3, 15))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
