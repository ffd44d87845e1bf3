use chrono::{Duration, NaiveDate};

use crate::model::grid::{self, CalendarDate, MonthPage};

/// How the view should move to the current index after a window operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollJump {
    /// Slide there with the paging animation.
    Animated,
    /// Snap there instantly. Used right after a page is inserted at the
    /// front (or the window is replaced) so the visible page does not move.
    Instant,
}

/// Infinite horizontal window of month pages.
///
/// The window grows at either end on demand and is never shrunk; landing on
/// the first or last index extends it by one adjacent month. The prepend
/// case shifts every index by one, so it reports an [`ScrollJump::Instant`]
/// correction that the view must apply after the insertion is committed.
#[derive(Debug, Clone)]
pub struct MonthWindow {
    pub pages: Vec<MonthPage>,
    pub index: usize,
}

impl MonthWindow {
    /// Seed with the previous, initial, and next month; start on the middle one.
    pub fn new(initial_month: NaiveDate) -> Self {
        let first = grid::month_start(initial_month);
        Self {
            pages: vec![
                grid::month_page(grid::prev_month(first)),
                grid::month_page(first),
                grid::month_page(grid::next_month(first)),
            ],
            index: 1,
        }
    }

    pub fn current(&self) -> Option<&MonthPage> {
        self.pages.get(self.index)
    }

    /// Month of the current page, normalized to day 1. Defaults to today's
    /// month when the window is empty.
    pub fn current_month(&self) -> NaiveDate {
        self.current()
            .map(MonthPage::month)
            .unwrap_or_else(|| grid::month_start(chrono::Local::now().date_naive()))
    }

    pub fn label(&self) -> String {
        self.current().map(|p| p.label.clone()).unwrap_or_default()
    }

    fn push_prev(&mut self) {
        let first = self.pages.first().map(MonthPage::month).unwrap_or_else(|| {
            grid::month_start(chrono::Local::now().date_naive())
        });
        self.pages.insert(0, grid::month_page(grid::prev_month(first)));
    }

    fn push_next(&mut self) {
        let last = self.pages.last().map(MonthPage::month).unwrap_or_else(|| {
            grid::month_start(chrono::Local::now().date_naive())
        });
        self.pages.push(grid::month_page(grid::next_month(last)));
    }

    /// A drag/scroll settled on `landed`. Extends the window when the landing
    /// index is a boundary and returns the correction the view must apply.
    pub fn settle(&mut self, landed: usize) -> Option<ScrollJump> {
        if self.pages.is_empty() || landed >= self.pages.len() {
            return None;
        }
        if landed == 0 {
            self.push_prev();
            self.index = 1;
            Some(ScrollJump::Instant)
        } else if landed == self.pages.len() - 1 {
            self.push_next();
            self.index = landed;
            None
        } else {
            self.index = landed;
            None
        }
    }

    /// Move one page back (header navigation).
    pub fn go_prev(&mut self) -> Option<ScrollJump> {
        if self.index == 0 {
            return None;
        }
        let new_index = self.index - 1;
        if new_index == 0 {
            self.push_prev();
            self.index = 1;
            Some(ScrollJump::Instant)
        } else {
            self.index = new_index;
            Some(ScrollJump::Animated)
        }
    }

    /// Move one page forward (header navigation).
    pub fn go_next(&mut self) -> Option<ScrollJump> {
        if self.index + 1 >= self.pages.len() {
            return None;
        }
        let new_index = self.index + 1;
        if new_index == self.pages.len() - 1 {
            self.push_next();
        }
        self.index = new_index;
        Some(ScrollJump::Animated)
    }

    /// Navigate to an arbitrary month. Scrolls there if a page for it is
    /// already in the window; otherwise replaces the entire window with a
    /// single page for that month and resets the index.
    pub fn go_to_month(&mut self, target: NaiveDate) -> ScrollJump {
        let target = grid::month_start(target);
        if let Some(found) = self.pages.iter().position(|p| p.month() == target) {
            self.index = found;
            ScrollJump::Animated
        } else {
            log::info!("month {} not in window, rebuilding around it", target.format("%Y-%m"));
            self.pages = vec![grid::month_page(target)];
            self.index = 0;
            ScrollJump::Instant
        }
    }
}

/// Infinite horizontal window of 7-day week pages. Only alive in week view;
/// rebuilt from scratch on every month→week transition.
#[derive(Debug, Clone)]
pub struct WeekWindow {
    pub pages: Vec<Vec<CalendarDate>>,
    pub index: usize,
}

impl WeekWindow {
    /// Build prev/current/next week pages around the week containing `base`.
    /// Returns `None` if the window cannot be built; the caller retries with
    /// today's date.
    pub fn init(base: NaiveDate) -> Option<Self> {
        let start = grid::week_start(base);
        let pages = vec![
            grid::week_page(start - Duration::days(7)),
            grid::week_page(start),
            grid::week_page(start + Duration::days(7)),
        ];
        if pages.iter().any(|p| p.len() != 7) {
            return None;
        }
        Some(Self { pages, index: 1 })
    }

    pub fn current(&self) -> Option<&Vec<CalendarDate>> {
        self.pages.get(self.index)
    }

    /// Week-start (Sunday) of the current page.
    pub fn current_week_start(&self) -> Option<NaiveDate> {
        self.current().and_then(|p| p.first()).map(|d| d.date)
    }

    /// Month the current week belongs to, taken from its first date.
    pub fn current_month(&self) -> Option<NaiveDate> {
        self.current_week_start().map(grid::month_start)
    }

    pub fn label(&self) -> String {
        self.current_week_start().map(grid::month_label).unwrap_or_default()
    }

    fn push_prev(&mut self) {
        if let Some(first) = self.pages.first().and_then(|p| p.first()).map(|d| d.date) {
            self.pages.insert(0, grid::week_page(first - Duration::days(7)));
        }
    }

    fn push_next(&mut self) {
        if let Some(last) = self.pages.last().and_then(|p| p.first()).map(|d| d.date) {
            self.pages.push(grid::week_page(last + Duration::days(7)));
        }
    }

    /// Same boundary-extension contract as [`MonthWindow::settle`].
    pub fn settle(&mut self, landed: usize) -> Option<ScrollJump> {
        if self.pages.is_empty() || landed >= self.pages.len() {
            return None;
        }
        if landed == 0 {
            self.push_prev();
            self.index = 1;
            Some(ScrollJump::Instant)
        } else if landed == self.pages.len() - 1 {
            self.push_next();
            self.index = landed;
            None
        } else {
            self.index = landed;
            None
        }
    }

    pub fn go_prev(&mut self) -> Option<ScrollJump> {
        if self.index == 0 {
            return None;
        }
        let new_index = self.index - 1;
        if new_index == 0 {
            self.push_prev();
            self.index = 1;
            Some(ScrollJump::Instant)
        } else {
            self.index = new_index;
            Some(ScrollJump::Animated)
        }
    }

    pub fn go_next(&mut self) -> Option<ScrollJump> {
        if self.index + 1 >= self.pages.len() {
            return None;
        }
        let new_index = self.index + 1;
        if new_index == self.pages.len() - 1 {
            self.push_next();
        }
        self.index = new_index;
        Some(ScrollJump::Animated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_window_seeds_three_pages() {
        let w = MonthWindow::new(ymd(2025, 6, 15));
        assert_eq!(w.pages.len(), 3);
        assert_eq!(w.index, 1);
        assert_eq!(w.pages[0].month(), ymd(2025, 5, 1));
        assert_eq!(w.current_month(), ymd(2025, 6, 1));
        assert_eq!(w.pages[2].month(), ymd(2025, 7, 1));
    }

    #[test]
    fn settling_on_front_prepends_and_recenters() {
        let mut w = MonthWindow::new(ymd(2025, 6, 1));
        let jump = w.settle(0);
        assert_eq!(jump, Some(ScrollJump::Instant));
        assert_eq!(w.pages.len(), 4);
        assert_eq!(w.index, 1);
        // Still looking at May; April was inserted behind it.
        assert_eq!(w.current_month(), ymd(2025, 5, 1));
        assert_eq!(w.pages[0].month(), ymd(2025, 4, 1));
    }

    #[test]
    fn settling_on_back_appends_in_place() {
        let mut w = MonthWindow::new(ymd(2025, 6, 1));
        let jump = w.settle(2);
        assert_eq!(jump, None);
        assert_eq!(w.pages.len(), 4);
        assert_eq!(w.index, 2);
        assert_eq!(w.current_month(), ymd(2025, 7, 1));
        assert_eq!(w.pages[3].month(), ymd(2025, 8, 1));
    }

    #[test]
    fn settling_mid_window_only_moves_index() {
        let mut w = MonthWindow::new(ymd(2025, 6, 1));
        w.settle(2); // now 4 pages
        let before = w.pages.clone();
        assert_eq!(w.settle(1), None);
        assert_eq!(w.index, 1);
        assert_eq!(w.pages.len(), before.len());
    }

    #[test]
    fn go_to_present_month_moves_index_without_mutating_window() {
        let mut w = MonthWindow::new(ymd(2025, 6, 1));
        let before = w.pages.clone();
        let jump = w.go_to_month(ymd(2025, 7, 20));
        assert_eq!(jump, ScrollJump::Animated);
        assert_eq!(w.index, 2);
        assert_eq!(w.pages, before);
    }

    #[test]
    fn go_to_absent_month_replaces_window_with_single_page() {
        let mut w = MonthWindow::new(ymd(2025, 6, 1));
        let jump = w.go_to_month(ymd(2030, 1, 5));
        assert_eq!(jump, ScrollJump::Instant);
        assert_eq!(w.pages.len(), 1);
        assert_eq!(w.index, 0);
        assert_eq!(w.current_month(), ymd(2030, 1, 1));
    }

    #[test]
    fn append_then_remove_round_trips_current_page() {
        let mut w = MonthWindow::new(ymd(2025, 6, 1));
        // Append at the back, then drop the appended page.
        w.settle(2);
        let at_back = w.current().cloned().unwrap();
        w.pages.pop();
        assert_eq!(w.current(), Some(&at_back));
        // Prepend at the front, then drop the prepended page.
        w.settle(0);
        let at_front = w.current().cloned().unwrap();
        w.pages.remove(0);
        w.index -= 1;
        assert_eq!(w.current(), Some(&at_front));
    }

    #[test]
    fn week_window_init_centers_on_weeks_sunday() {
        let w = WeekWindow::init(ymd(2026, 8, 29)).unwrap();
        assert_eq!(w.pages.len(), 3);
        assert_eq!(w.index, 1);
        // 2026-08-29 is a Saturday; its week starts Sunday the 23rd.
        assert_eq!(w.current_week_start(), Some(ymd(2026, 8, 23)));
        assert_eq!(w.pages[0][0].date, ymd(2026, 8, 16));
        assert_eq!(w.pages[2][0].date, ymd(2026, 8, 30));
    }

    #[test]
    fn week_window_extends_at_boundaries() {
        let mut w = WeekWindow::init(ymd(2025, 6, 4)).unwrap();
        assert_eq!(w.settle(0), Some(ScrollJump::Instant));
        assert_eq!(w.pages.len(), 4);
        assert_eq!(w.index, 1);
        assert_eq!(w.go_next(), Some(ScrollJump::Animated));
        assert_eq!(w.go_next(), Some(ScrollJump::Animated));
        // Reached what was the last page, so another week was appended.
        assert_eq!(w.pages.len(), 5);
    }

    #[test]
    fn week_window_reports_month_of_current_week() {
        let mut w = WeekWindow::init(ymd(2026, 8, 29)).unwrap();
        assert_eq!(w.current_month(), Some(ymd(2026, 8, 1)));
        w.go_next();
        // Next week starts Aug 30 but still reports August from its first date.
        assert_eq!(w.current_month(), Some(ymd(2026, 8, 1)));
        w.go_next();
        assert_eq!(w.current_month(), Some(ymd(2026, 9, 1)));
    }

    #[test]
    fn settle_ignores_out_of_range_indices() {
        let mut w = MonthWindow::new(ymd(2025, 6, 1));
        assert_eq!(w.settle(99), None);
        assert_eq!(w.index, 1);
        assert_eq!(w.pages.len(), 3);
    }
}
