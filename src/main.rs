//! Checkers GUI
//!
//! A graphical interface for playing checkers against the AI, another
//! player, or watching two AIs play each other.

use checkers::ui::CheckersApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(|cc| Ok(Box::new(CheckersApp::new(cc)))),
    )
}
