use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{RelayCommand, RelayEvent};
use crate::config::AppConfig;

use super::components::{chat_area, input_bar, session_panel};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    config: AppConfig,
    command_sender: mpsc::Sender<RelayCommand>,
    event_receiver: mpsc::Receiver<RelayEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        command_sender: mpsc::Sender<RelayCommand>,
        event_receiver: mpsc::Receiver<RelayEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            config,
            command_sender,
            event_receiver,
        }
    }

    fn handle_relay_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply_relay_event(event);
        }
    }

    fn send_command(&mut self, command: RelayCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to relay: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_relay_events();

        egui::SidePanel::left("session_panel").show(ctx, |ui| {
            session_panel::render(ui, &self.config, &self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chat");
            ui.separator();
            if let Some(target_id) = chat_area::render(ui, &self.state.messages, self.state.typing)
            {
                self.send_command(RelayCommand::CancelTurn { target_id });
            }

            ui.separator();
            if input_bar::render(ui, &mut self.state.input_text) {
                let raw_input = std::mem::take(&mut self.state.input_text);
                if let Some(command) = self.state.begin_turn(&raw_input) {
                    self.send_command(command);
                }
            }
        });

        ctx.request_repaint();
    }
}
