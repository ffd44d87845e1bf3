use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::ui::theme;

/// Actions the calendar header can request.
pub enum HeaderAction {
    None,
    Prev,
    Next,
    /// Jump to the month containing this date.
    JumpTo(NaiveDate),
}

/// Render the header row: prev/next chevrons around the current month/week
/// label, and a date picker for jumping to an arbitrary month.
pub fn show_header(label: &str, jump_date: &mut NaiveDate, ui: &mut Ui) -> HeaderAction {
    let mut action = HeaderAction::None;

    ui.horizontal(|ui| {
        ui.add_space(8.0);
        if ui
            .button(RichText::new(egui_phosphor::regular::CARET_LEFT).size(16.0))
            .clicked()
        {
            action = HeaderAction::Prev;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            if ui
                .button(RichText::new(egui_phosphor::regular::CARET_RIGHT).size(16.0))
                .clicked()
            {
                action = HeaderAction::Next;
            }
            let picker = ui.add(egui_extras::DatePickerButton::new(jump_date).id_salt("jump-date"));
            if picker.changed() {
                action = HeaderAction::JumpTo(*jump_date);
            }

            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(
                        RichText::new(label)
                            .font(theme::font_header())
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                },
            );
        });
    });

    action
}
