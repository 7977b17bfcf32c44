// main.rs - Lights Out desktop shell

use eframe::egui;

mod ui;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lights Out",
        options,
        Box::new(|_cc| Box::new(ui::LightsOutApp::default())),
    )
}
