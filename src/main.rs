#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Rust Calendar App");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Rust Calendar App"),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Calendar App",
        options,
        Box::new(|cc| Ok(Box::new(app::CalendarApp::new(cc)))),
    )
}
