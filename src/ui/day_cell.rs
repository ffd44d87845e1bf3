use chrono::{Datelike, NaiveDate};
use egui::{Align2, Id, Rect, Sense, Stroke, Ui};

use crate::model::grid::WEEK_LABELS;
use crate::model::CalendarDate;
use crate::ui::theme;

/// Paint one day cell centered in `rect` and report a click. `salt`
/// disambiguates the id when the same date shows up on adjacent pages.
pub fn day_cell(
    ui: &mut Ui,
    rect: Rect,
    cell: &CalendarDate,
    today: NaiveDate,
    is_selected: bool,
    salt: usize,
) -> bool {
    let response = ui.interact(rect, Id::new(("day-cell", salt, cell.date)), Sense::click());
    let painter = ui.painter();
    let center = rect.center();
    let is_today = cell.date == today;

    if is_selected {
        painter.circle_filled(center, theme::DAY_CIRCLE_RADIUS, theme::SELECTED_FILL);
    }
    if is_today {
        painter.circle_stroke(
            center,
            theme::DAY_CIRCLE_RADIUS,
            Stroke::new(1.5, theme::TODAY_RING),
        );
    }

    let color = if is_selected {
        theme::TEXT_ON_SELECTED
    } else if !cell.is_current_month {
        theme::TEXT_DIM
    } else {
        theme::TEXT_PRIMARY
    };
    painter.text(
        center,
        Align2::CENTER_CENTER,
        cell.date.day().to_string(),
        theme::font_day(),
        color,
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

/// Paint the Sun..Sat label row across `rect`, Sunday red and Saturday blue.
pub fn weekday_row(ui: &Ui, rect: Rect) {
    let painter = ui.painter();
    let col_width = rect.width() / 7.0;
    for (i, label) in WEEK_LABELS.iter().enumerate() {
        let color = match i {
            0 => theme::SUNDAY_LABEL,
            6 => theme::SATURDAY_LABEL,
            _ => theme::TEXT_SECONDARY,
        };
        painter.text(
            egui::pos2(
                rect.left() + col_width * (i as f32 + 0.5),
                rect.center().y,
            ),
            Align2::CENTER_CENTER,
            *label,
            theme::font_weekday(),
            color,
        );
    }
}
