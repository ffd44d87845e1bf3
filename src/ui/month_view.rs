use chrono::NaiveDate;
use egui::{Id, Rect, Sense, Ui, Vec2};

use crate::model::{MonthWindow, ViewState};
use crate::ui::day_cell;
use crate::ui::gesture::{PanTracker, Swipe};
use crate::ui::theme;

/// Result details from interactions with a calendar surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarInteraction {
    /// A day cell was pressed.
    pub pressed: Option<NaiveDate>,
    /// The pan gesture released into a swipe.
    pub swipe: Swipe,
}

pub const MONTH_OFFSET_ID: &str = "month-strip-offset";

/// Render the paged month grid. The current page is drawn at the tracker's
/// horizontal offset with its neighbors to either side, so a drag shows the
/// adjacent months sliding in.
pub fn show_month_view(
    window: &MonthWindow,
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

    let offset_x = tracker.offset_x(ui.ctx(), Id::new(MONTH_OFFSET_ID));
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

    let grid_rect = Rect::from_min_max(
        egui::pos2(rect.left(), weekday_rect.bottom()),
        rect.max + Vec2::new(0.0, offset_y),
    );
    let today = chrono::Local::now().date_naive();

    // Current page plus one neighbor to each side.
    let lo = window.index.saturating_sub(1);
    let hi = (window.index + 1).min(window.pages.len().saturating_sub(1));
    for page_idx in lo..=hi {
        let shift = offset_x + (page_idx as f32 - window.index as f32) * rect.width();
        if shift.abs() >= rect.width() {
            continue;
        }
        let page_rect = grid_rect.translate(Vec2::new(shift, 0.0));
        if let Some(page) = window.pages.get(page_idx) {
            if let Some(date) = draw_month_page(ui, page_rect, &page.dates, today, view, page_idx) {
                interaction.pressed = Some(date);
            }
        }
    }

    ui.set_clip_rect(saved_clip);
    interaction
}

fn draw_month_page(
    ui: &mut Ui,
    rect: Rect,
    dates: &[crate::model::CalendarDate],
    today: NaiveDate,
    view: &ViewState,
    salt: usize,
) -> Option<NaiveDate> {
    let rows = (dates.len() / 7).max(1);
    let cell_w = rect.width() / 7.0;
    let cell_h = (rect.height() / rows as f32).max(theme::CELL_MIN_HEIGHT * 0.6);
    let mut pressed = None;

    for (i, cell) in dates.iter().enumerate() {
        let col = (i % 7) as f32;
        let row = (i / 7) as f32;
        let cell_rect = Rect::from_min_size(
            egui::pos2(rect.left() + col * cell_w, rect.top() + row * cell_h),
            Vec2::new(cell_w, cell_h),
        );
        let selected = view.is_selected(cell.date);
        if day_cell::day_cell(ui, cell_rect, cell, today, selected, salt) {
            pressed = Some(cell.date);
        }
    }

    pressed
}
