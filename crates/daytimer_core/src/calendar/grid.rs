//! Month grid layout.
//!
//! Weeks start on Sunday. The first and last week are padded with days from
//! the adjacent months, and the grid holds only the weeks the month spans.

use chrono::{Datelike, Days, Months, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

/// First day of the month before the one containing `date`.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

/// Whether both dates fall in the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Rows of seven consecutive days covering the month of `date`.
pub fn month_weeks(date: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let first = first_of_month(date);
    let leading = u64::from(first.weekday().num_days_from_sunday());
    let grid_start = first.checked_sub_days(Days::new(leading)).unwrap_or(first);

    let mut weeks = Vec::new();
    let mut week_start = grid_start;
    loop {
        let mut week = [week_start; 7];
        for (offset, slot) in week.iter_mut().enumerate() {
            match week_start.checked_add_days(Days::new(offset as u64)) {
                Some(day) => *slot = day,
                None => return weeks,
            }
        }
        weeks.push(week);

        match week_start.checked_add_days(Days::new(7)) {
            Some(next) if same_month(next, first) => week_start = next,
            _ => break,
        }
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::{month_weeks, next_month, previous_month};
    use chrono::{Datelike, NaiveDate, Weekday};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn june_2024_spans_six_weeks() {
        // June 1st 2024 is a Saturday and June 30th a Sunday.
        let weeks = month_weeks(day(2024, 6, 15));
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][0], day(2024, 5, 26));
        assert_eq!(weeks[0][6], day(2024, 6, 1));
        assert_eq!(weeks[5][0], day(2024, 6, 30));
        assert_eq!(weeks[5][6], day(2024, 7, 6));
        assert!(weeks.iter().all(|week| week[0].weekday() == Weekday::Sun));
    }

    #[test]
    fn february_2015_fits_four_weeks() {
        let weeks = month_weeks(day(2015, 2, 1));
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[3][6], day(2015, 2, 28));
    }

    #[test]
    fn month_navigation_crosses_year_boundaries() {
        assert_eq!(next_month(day(2024, 12, 31)), day(2025, 1, 1));
        assert_eq!(previous_month(day(2024, 1, 15)), day(2023, 12, 1));
    }
}
