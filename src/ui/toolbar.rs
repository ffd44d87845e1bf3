use crate::app::CalendarApp;
use crate::model::ViewMode;
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut CalendarApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            let in_month = app.view.mode == ViewMode::Month;
            if ui.radio(in_month, "Month view").clicked() {
                app.enter_month_view();
                ui.close_menu();
            }
            if ui.radio(!in_month, "Week view").clicked() {
                app.enter_week_view();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Today          T").clicked() {
                app.go_today();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned mode indicator
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mode = match app.view.mode {
                ViewMode::Month => "Month",
                ViewMode::Week => "Week",
            };
            ui.label(RichText::new(mode).size(11.0).weak());
        });
    });
}
