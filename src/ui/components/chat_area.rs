use eframe::egui;

use crate::common::{ChatMessage, MessageStatus, Role};

/// Stateless bubble renderer: user messages on the right, assistant on
/// the left. Returns the id of a streaming bubble whose Stop button was
/// clicked.
pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage], typing: bool) -> Option<String> {
    let mut cancel_target = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                bubble(ui, message, &mut cancel_target);
                ui.add_space(4.0);
            }

            if typing {
                ui.label(egui::RichText::new("assistant is typing...").weak().italics());
            }
        });

    cancel_target
}

fn bubble(ui: &mut egui::Ui, message: &ChatMessage, cancel_target: &mut Option<String>) {
    let layout = match message.role {
        Role::User => egui::Layout::right_to_left(egui::Align::TOP),
        Role::Assistant => egui::Layout::left_to_right(egui::Align::TOP),
    };

    ui.with_layout(layout, |ui| {
        let fill = match message.role {
            Role::User => ui.visuals().selection.bg_fill.gamma_multiply(0.4),
            Role::Assistant => ui.visuals().faint_bg_color,
        };

        egui::Frame::group(ui.style())
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.75);
                ui.vertical(|ui| {
                    match message.status {
                        MessageStatus::Failed => {
                            ui.colored_label(egui::Color32::LIGHT_RED, &message.content);
                        }
                        _ => {
                            ui.label(&message.content);
                        }
                    }

                    match message.status {
                        MessageStatus::Interrupted => {
                            ui.label(egui::RichText::new("(interrupted)").weak());
                        }
                        MessageStatus::Streaming => {
                            if ui.small_button("Stop").clicked() {
                                *cancel_target = Some(message.id.clone());
                            }
                        }
                        _ => {}
                    }

                    if let Some(time) = chrono::DateTime::from_timestamp(message.timestamp, 0) {
                        ui.label(
                            egui::RichText::new(time.format("%H:%M").to_string())
                                .weak()
                                .small(),
                        );
                    }
                });
            });
    });
}
