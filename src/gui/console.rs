//! Side panel listing the most recent log lines.
use crate::utils::logger::{Logger, GLOBAL_LOGGER};

const LINES_SHOWN: usize = 200;

pub fn show_ui(ui: &mut egui::Ui) {
    ui.label("Log");
    ui.separator();
    let Some(logger) = GLOBAL_LOGGER.get() else {
        ui.colored_label(egui::Color32::YELLOW, "logger is not installed");
        return;
    };
    egui::ScrollArea::vertical().show(ui, |ui| {
        for (line, level) in logger.recent(LINES_SHOWN) {
            ui.colored_label(Logger::get_color(level), line);
        }
    });
}
