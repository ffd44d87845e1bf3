use chrono::NaiveDate;

use crate::model::grid;
use crate::model::window::{MonthWindow, ScrollJump, WeekWindow};

/// Which layout the calendar is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Week,
}

/// View-mode state machine plus date selection.
///
/// Only two states exist and a gesture commits a transition on release;
/// there is no intermediate state while a drag is in flight. The week
/// window lives here because it only exists while in week view.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub mode: ViewMode,
    pub selected: Option<NaiveDate>,
    pub weeks: Option<WeekWindow>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Month,
            selected: None,
            weeks: None,
        }
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == Some(date)
    }

    /// month → week. Centers the 3-page week window on the selected date,
    /// falling back to today. A failed init retries once with today.
    pub fn switch_to_week(&mut self) {
        if self.mode == ViewMode::Week {
            return;
        }
        let today = chrono::Local::now().date_naive();
        let base = self.selected.unwrap_or(today);
        let weeks = WeekWindow::init(base).or_else(|| {
            log::warn!("week window init failed for {}, retrying with today", base);
            WeekWindow::init(today)
        });
        self.weeks = weeks;
        self.mode = ViewMode::Week;
    }

    /// week → month. Resolves the target month from the selected date or the
    /// current week-start, finds or creates its page in the month window,
    /// then discards the week window.
    pub fn switch_to_month(&mut self, months: &mut MonthWindow) -> ScrollJump {
        let target = self
            .selected
            .map(grid::month_start)
            .or_else(|| self.weeks.as_ref().and_then(WeekWindow::current_month))
            .unwrap_or_else(|| grid::month_start(chrono::Local::now().date_naive()));
        let jump = months.go_to_month(target);
        self.mode = ViewMode::Month;
        self.weeks = None;
        jump
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn switch_to_week_centers_on_selected_date() {
        let mut view = ViewState::new();
        view.select(ymd(2025, 6, 11)); // a Wednesday
        view.switch_to_week();
        assert_eq!(view.mode, ViewMode::Week);
        let weeks = view.weeks.as_ref().unwrap();
        assert_eq!(weeks.pages.len(), 3);
        assert_eq!(weeks.current_week_start(), Some(ymd(2025, 6, 8)));
        assert_eq!(
            weeks.pages[0][0].date,
            ymd(2025, 6, 8) - Duration::days(7)
        );
    }

    #[test]
    fn switch_to_week_without_selection_uses_today() {
        let mut view = ViewState::new();
        view.switch_to_week();
        let today = chrono::Local::now().date_naive();
        let weeks = view.weeks.as_ref().unwrap();
        let start = weeks.current_week_start().unwrap();
        assert!(start <= today && (today - start).num_days() <= 6);
    }

    #[test]
    fn switch_to_month_resolves_week_month_and_drops_week_state() {
        let mut months = MonthWindow::new(ymd(2025, 6, 1));
        let mut view = ViewState::new();
        view.select(ymd(2025, 7, 9));
        view.switch_to_week();
        let jump = view.switch_to_month(&mut months);
        assert_eq!(view.mode, ViewMode::Month);
        assert!(view.weeks.is_none());
        // July is already in the seeded window, so only the index moved.
        assert_eq!(jump, ScrollJump::Animated);
        assert_eq!(months.current_month(), ymd(2025, 7, 1));
        assert_eq!(months.pages.len(), 3);
    }

    #[test]
    fn switch_to_month_rebuilds_window_for_far_away_weeks() {
        let mut months = MonthWindow::new(ymd(2025, 6, 1));
        let mut view = ViewState::new();
        view.select(ymd(2031, 2, 14));
        view.switch_to_week();
        // Selection drives the target month even though the window lacks it.
        let jump = view.switch_to_month(&mut months);
        assert_eq!(jump, ScrollJump::Instant);
        assert_eq!(months.pages.len(), 1);
        assert_eq!(months.current_month(), ymd(2031, 2, 1));
    }

    #[test]
    fn switching_to_week_twice_is_a_no_op() {
        let mut view = ViewState::new();
        view.select(ymd(2025, 6, 11));
        view.switch_to_week();
        let start = view.weeks.as_ref().unwrap().current_week_start();
        view.select(ymd(2025, 12, 25));
        view.switch_to_week();
        assert_eq!(view.weeks.as_ref().unwrap().current_week_start(), start);
    }

    #[test]
    fn selection_toggles_per_date() {
        let mut view = ViewState::new();
        assert!(!view.is_selected(ymd(2025, 1, 1)));
        view.select(ymd(2025, 1, 1));
        assert!(view.is_selected(ymd(2025, 1, 1)));
        assert!(!view.is_selected(ymd(2025, 1, 2)));
    }
}
