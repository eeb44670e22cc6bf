//! App shell: worker event intake, form rendering, and clipboard copy.

use arboard::Clipboard;
use crossbeam_channel::{Receiver, Sender};
use shared::domain::Tone;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{dispatch_backend_command, DispatchOutcome};
use crate::controller::reducer::ReplyForm;

pub struct EmailReplyApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: ReplyForm,
    status: String,
}

impl EmailReplyApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: ReplyForm::new(),
            status: "Starting reply worker...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::ReplyGenerated(reply) => self.form.complete_success(reply),
                UiEvent::GenerationFailed => self.form.complete_failure(),
            }
        }
    }

    fn try_generate(&mut self) {
        let Some(request) = self.form.begin_submit() else {
            return;
        };
        match dispatch_backend_command(&self.cmd_tx, BackendCommand::GenerateReply { request }) {
            DispatchOutcome::Queued => {}
            DispatchOutcome::QueueFull | DispatchOutcome::Disconnected => {
                // The request never left the queue; fail out of Pending.
                self.form.complete_failure();
            }
        }
    }

    fn copy_reply_to_clipboard(&mut self) {
        if let Some(reply) = self.form.reply_to_copy() {
            // Best-effort; clipboard failures are not surfaced.
            if let Ok(mut clipboard) = Clipboard::new() {
                let _ = clipboard.set_text(reply.to_string());
            }
            self.status = "Reply copied to clipboard".to_string();
        }
    }
}

impl eframe::App for EmailReplyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        // Keep draining worker events while a request is in flight.
        if self.form.is_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Email Reply Generator");
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Original email").strong());
            ui.add(
                egui::TextEdit::multiline(&mut self.form.email_content)
                    .hint_text("Paste the email you want to answer")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Tone");
                egui::ComboBox::from_id_source("tone_select")
                    .selected_text(self.form.tone.label())
                    .show_ui(ui, |ui| {
                        for tone in Tone::ALL {
                            ui.selectable_value(&mut self.form.tone, tone, tone.label());
                        }
                    });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let generate =
                    ui.add_enabled(self.form.can_submit(), egui::Button::new("Generate reply"));
                if generate.clicked() {
                    self.try_generate();
                }
                if self.form.is_pending() {
                    ui.spinner();
                }
            });

            if let Some(message) = self.form.error_message() {
                ui.add_space(6.0);
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }

            if let Some(reply) = self.form.displayed_reply().map(str::to_owned) {
                ui.add_space(10.0);
                ui.separator();
                ui.label(egui::RichText::new("Generated reply").strong());
                let mut reply_text = reply.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut reply_text)
                        .desired_rows(6)
                        .desired_width(f32::INFINITY),
                );
                let copy = ui.add_enabled(
                    self.form.reply_to_copy().is_some(),
                    egui::Button::new("Copy to clipboard"),
                );
                if copy.clicked() {
                    self.copy_reply_to_clipboard();
                }
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
    }
}
