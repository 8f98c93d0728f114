use chrono::{Days, Months, NaiveDate};

/// Annuity due date: six calendar months after the hire date, minus one
/// day.
///
/// Month addition clamps out-of-range days to the last valid day of the
/// target month (2024-08-31 + 6 months = 2025-02-28, due 2025-02-27). The
/// clamp applies uniformly to every hire date on the 29th-31st.
///
/// `None` only on calendar overflow, which callers treat as unusable input.
pub(crate) fn due_date(hire_date: NaiveDate) -> Option<NaiveDate> {
    hire_date
        .checked_add_months(Months::new(6))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
}

/// Signed whole days from today (local midnight) to the due date. Negative
/// when overdue, zero when due today.
pub(crate) fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn six_months_minus_one_day() {
        assert_eq!(due_date(ymd(2024, 1, 15)), Some(ymd(2024, 7, 14)));
        assert_eq!(due_date(ymd(2024, 1, 10)), Some(ymd(2024, 7, 9)));
    }

    #[test]
    fn carries_into_next_year() {
        assert_eq!(due_date(ymd(2023, 9, 10)), Some(ymd(2024, 3, 9)));
        assert_eq!(due_date(ymd(2024, 12, 1)), Some(ymd(2025, 5, 31)));
    }

    #[test]
    fn month_end_hire_clamps_to_target_month_end() {
        // 2024-08-31 + 6 months clamps to 2025-02-28, then -1 day.
        assert_eq!(due_date(ymd(2024, 8, 31)), Some(ymd(2025, 2, 27)));
        assert_eq!(due_date(ymd(2024, 3, 31)), Some(ymd(2024, 9, 29)));
    }

    #[test]
    fn offset_sign_convention() {
        let due = ymd(2024, 7, 9);
        assert_eq!(days_until(due, ymd(2024, 7, 9)), 0);
        assert_eq!(days_until(due, ymd(2024, 7, 5)), 4);
        assert_eq!(days_until(due, ymd(2024, 7, 12)), -3);
    }
}
