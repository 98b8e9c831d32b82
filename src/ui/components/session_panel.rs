use eframe::egui;

use crate::config::AppConfig;
use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, config: &AppConfig, state: &AppState) {
    ui.heading("Session");
    ui.separator();

    ui.label("Model:");
    ui.monospace(&config.model);
    ui.label("Endpoint:");
    ui.monospace(&config.base_url);

    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Messages:");
        ui.label(format!("{}", state.messages.len()));
    });
    ui.horizontal(|ui| {
        ui.label("Turns completed:");
        ui.label(format!("{}", state.turns_completed));
    });

    ui.horizontal(|ui| {
        if state.typing {
            ui.colored_label(egui::Color32::GREEN, "●");
            ui.label("streaming");
        } else {
            ui.colored_label(egui::Color32::GRAY, "●");
            ui.label("idle");
        }
    });

    ui.separator();
    ui.label(
        egui::RichText::new(format!(
            "Session started {}",
            state.started_at.format("%H:%M:%S")
        ))
        .weak(),
    );
}
