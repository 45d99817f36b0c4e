// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for editing a profile.
//! Handles layout, form controls, and wiring to the submission guard.

pub mod components;

use crate::config::GuardConfig;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::profile_fields::{self, ProfileFieldsMsg};

/// Stateful egui application hosting the profile form.
pub struct ProfileFormApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl ProfileFormApp {
    /// Spawn the command workers and queue the content-loaded signal for the first frame.
    pub fn new(config: GuardConfig) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        // Two workers; an open native alert holds at most one of them.
        for _ in 0..2 {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::new(config),
            inbox: vec![Msg::ContentLoaded],
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for ProfileFormApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which eframe still invokes.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: applies worker results and queued messages, then renders the form.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Edit profile");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    self.render_submit_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_alert_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            let blocked = self.model.is_blocked();
            ui.add_enabled_ui(!blocked, |ui| {
                let msgs = profile_fields::view(ui, |field| self.model.field(field));
                self.inbox.extend(msgs.into_iter().map(|msg| match msg {
                    ProfileFieldsMsg::Changed(field, value) => Msg::FieldChanged(field, value),
                    ProfileFieldsMsg::SubmitPressed => Msg::SubmitRequested,
                }));
            });
        });

        // Messages raised while rendering are applied on the next frame.
        if !self.inbox.is_empty() || self.model.pending_commands > 0 {
            ctx.request_repaint();
        }
    }
}

impl ProfileFormApp {
    /// Render the submit button. Validation happens on submit, never by disabling the button.
    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!(
            "{} Save profile",
            egui_phosphor::regular::FLOPPY_DISK
        ));
        if ui.add_enabled(!self.model.is_blocked(), button).clicked() {
            self.inbox.push(Msg::SubmitRequested);
        }
    }

    /// Render the blocking modal for alerts.
    fn render_alert_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.alert.clone() {
            egui::Window::new("Profile")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::AlertDismissed);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        let Some(text) = &self.model.status else {
            return;
        };
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0));
            }
            if self.model.submissions > 0 {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} submitted", self.model.submissions))
                            .small()
                            .color(egui::Color32::from_gray(110)),
                    );
                });
            }
        });
    }
}
