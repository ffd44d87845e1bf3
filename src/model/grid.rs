use chrono::{Datelike, Duration, NaiveDate};

/// Fixed weekday label set, Sunday-first.
pub const WEEK_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A single cell of a calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub date: NaiveDate,
    /// False for padding cells borrowed from the previous/next month.
    pub is_current_month: bool,
}

/// One month's worth of grid cells plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPage {
    pub dates: Vec<CalendarDate>,
    pub label: String,
}

impl MonthPage {
    /// First in-month date of the page, normalized to day 1.
    /// Falls back to today's month if the page is somehow empty.
    pub fn month(&self) -> NaiveDate {
        self.dates
            .iter()
            .find(|d| d.is_current_month)
            .map(|d| month_start(d.date))
            .unwrap_or_else(|| month_start(chrono::Local::now().date_naive()))
    }
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// First day of the month before the one containing `date`.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or_else(|| month_start(date))
}

/// First day of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or_else(|| month_start(date))
}

/// Display label for the month containing `date`, e.g. "February 2024".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Build the complete-week-padded grid for the month containing `date`.
///
/// The grid starts on the Sunday of the week containing day 1 and ends on
/// the Saturday of the week containing the last day, so its length is
/// always a multiple of 7. Padding cells carry `is_current_month = false`.
pub fn month_page(date: NaiveDate) -> MonthPage {
    let first = month_start(date);
    let last = next_month(first) - Duration::days(1);

    let leading = first.weekday().num_days_from_sunday() as i64;
    let trailing = 6 - last.weekday().num_days_from_sunday() as i64;

    let mut dates = Vec::with_capacity((leading + last.day() as i64 + trailing) as usize);

    for i in (1..=leading).rev() {
        dates.push(CalendarDate {
            date: first - Duration::days(i),
            is_current_month: false,
        });
    }
    for i in 0..last.day() as i64 {
        dates.push(CalendarDate {
            date: first + Duration::days(i),
            is_current_month: true,
        });
    }
    for i in 1..=trailing {
        dates.push(CalendarDate {
            date: last + Duration::days(i),
            is_current_month: false,
        });
    }

    MonthPage {
        dates,
        label: month_label(first),
    }
}

/// Build a 7-day window starting at `start` (expected to be a Sunday).
/// Week view has no adjacent-month dimming, so every cell is current.
pub fn week_page(start: NaiveDate) -> Vec<CalendarDate> {
    (0..7)
        .map(|i| CalendarDate {
            date: start + Duration::days(i),
            is_current_month: true,
        })
        .collect()
}

/// Recompute the `is_current_month` flags of a week relative to the week's
/// first date, for grid-style display of a week page.
pub fn week_month_flags(week: &[CalendarDate]) -> Vec<CalendarDate> {
    let reference = week
        .first()
        .map(|d| d.date.month())
        .unwrap_or_else(|| chrono::Local::now().date_naive().month());
    week.iter()
        .map(|d| CalendarDate {
            date: d.date,
            is_current_month: d.date.month() == reference,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_grid_spans_complete_weeks() {
        for (y, m) in [(2024, 2), (2025, 3), (2025, 12), (2026, 1), (2023, 6)] {
            let page = month_page(ymd(y, m, 15));
            assert_eq!(page.dates.len() % 7, 0, "{}/{} not a whole number of weeks", y, m);
            assert_eq!(page.dates[0].date.weekday(), Weekday::Sun);
            assert_eq!(page.dates.last().unwrap().date.weekday(), Weekday::Sat);
        }
    }

    #[test]
    fn month_grid_covers_month_exactly_once() {
        let page = month_page(ymd(2025, 3, 1));
        let current: Vec<_> = page.dates.iter().filter(|d| d.is_current_month).collect();
        assert_eq!(current.len(), 31);
        for (i, cell) in current.iter().enumerate() {
            assert_eq!(cell.date, ymd(2025, 3, i as u32 + 1));
        }
        assert!(page
            .dates
            .iter()
            .filter(|d| !d.is_current_month)
            .all(|d| d.date.month() != 3));
    }

    #[test]
    fn february_2024_leap_grid() {
        // 2024-02-01 is a Thursday: four leading cells, 29 current, two trailing.
        let page = month_page(ymd(2024, 2, 10));
        let leading = page.dates.iter().take_while(|d| !d.is_current_month).count();
        let current = page.dates.iter().filter(|d| d.is_current_month).count();
        assert_eq!(leading, 4);
        assert_eq!(current, 29);
        assert_eq!(page.dates.len(), 35);
        assert_eq!(page.label, "February 2024");
    }

    #[test]
    fn week_start_is_sunday_at_most_six_days_back() {
        let mut date = ymd(2024, 1, 1);
        for _ in 0..60 {
            let start = week_start(date);
            assert_eq!(start.weekday(), Weekday::Sun);
            let back = (date - start).num_days();
            assert!((0..=6).contains(&back), "{} -> {}", date, start);
            date += Duration::days(1);
        }
    }

    #[test]
    fn week_page_is_seven_consecutive_current_days() {
        let start = week_start(ymd(2026, 8, 29));
        let week = week_page(start);
        assert_eq!(week.len(), 7);
        for (i, cell) in week.iter().enumerate() {
            assert_eq!(cell.date, start + Duration::days(i as i64));
            assert!(cell.is_current_month);
        }
    }

    #[test]
    fn week_month_flags_follow_first_date() {
        // Week spanning a month boundary: Aug 30 2026 is a Sunday.
        let week = week_page(ymd(2026, 8, 30));
        let flagged = week_month_flags(&week);
        assert!(flagged[0].is_current_month);
        assert!(flagged[1].is_current_month); // Aug 31
        assert!(!flagged[2].is_current_month); // Sep 1
        assert!(!flagged[6].is_current_month);
    }

    #[test]
    fn month_helpers_wrap_year_boundaries() {
        assert_eq!(prev_month(ymd(2025, 1, 20)), ymd(2024, 12, 1));
        assert_eq!(next_month(ymd(2024, 12, 5)), ymd(2025, 1, 1));
        assert_eq!(month_start(ymd(2024, 6, 17)), ymd(2024, 6, 1));
    }
}
