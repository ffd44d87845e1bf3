use chrono::NaiveDate;
use egui::{Id, Rect, Sense, Ui, Vec2};

use crate::model::{grid, ViewState, WeekWindow};
use crate::ui::day_cell;
use crate::ui::gesture::PanTracker;
use crate::ui::month_view::CalendarInteraction;
use crate::ui::theme;

pub const WEEK_OFFSET_ID: &str = "week-strip-offset";

/// Render the paged week strip: one weekday label row plus a single 7-cell
/// row per page, paged horizontally like the month view.
pub fn show_week_view(
    window: &WeekWindow,
    view: &ViewState,
    tracker: &mut PanTracker,
    height: f32,
    ui: &mut Ui,
) -> CalendarInteraction {
    let mut interaction = CalendarInteraction::default();

    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), height),
        Sense::click_and_drag(),
    );
    interaction.swipe = tracker.update(&response, rect.width(), ui.ctx());

    let offset_x = tracker.offset_x(ui.ctx(), Id::new(WEEK_OFFSET_ID));
    let offset_y = tracker.offset_y(ui.ctx(), Id::new("calendar-translate-y"));

    // Keep dragged pages from painting outside the calendar body.
    let saved_clip = ui.clip_rect();
    ui.set_clip_rect(rect.intersect(saved_clip));
    ui.painter().rect_filled(rect, 0.0, theme::BG_DARK);

    let weekday_rect = Rect::from_min_size(
        rect.min + Vec2::new(0.0, offset_y),
        Vec2::new(rect.width(), theme::WEEKDAY_ROW_HEIGHT),
    );
    day_cell::weekday_row(ui, weekday_rect);

    let strip_rect = Rect::from_min_max(
        egui::pos2(rect.left(), weekday_rect.bottom()),
        rect.max + Vec2::new(0.0, offset_y),
    );
    let today = chrono::Local::now().date_naive();

    let lo = window.index.saturating_sub(1);
    let hi = (window.index + 1).min(window.pages.len().saturating_sub(1));
    for page_idx in lo..=hi {
        let shift = offset_x + (page_idx as f32 - window.index as f32) * rect.width();
        if shift.abs() >= rect.width() {
            continue;
        }
        let page_rect = strip_rect.translate(Vec2::new(shift, 0.0));
        let Some(page) = window.pages.get(page_idx) else {
            continue;
        };
        // Grid display dims dates outside the week's own month.
        let flagged = grid::week_month_flags(page);
        if let Some(date) = draw_week_row(ui, page_rect, &flagged, today, view, page_idx) {
            interaction.pressed = Some(date);
        }
    }

    ui.set_clip_rect(saved_clip);
    interaction
}

fn draw_week_row(
    ui: &mut Ui,
    rect: Rect,
    dates: &[crate::model::CalendarDate],
    today: NaiveDate,
    view: &ViewState,
    salt: usize,
) -> Option<NaiveDate> {
    let cell_w = rect.width() / 7.0;
    let cell_h = rect.height().max(theme::CELL_MIN_HEIGHT);
    let mut pressed = None;

    for (i, cell) in dates.iter().enumerate() {
        let cell_rect = Rect::from_min_size(
            egui::pos2(rect.left() + i as f32 * cell_w, rect.top()),
            Vec2::new(cell_w, cell_h),
        );
        let selected = view.is_selected(cell.date);
        if day_cell::day_cell(ui, cell_rect, cell, today, selected, salt + 100) {
            pressed = Some(cell.date);
        }
    }

    pressed
}
