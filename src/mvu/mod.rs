// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring form state, messages, and commands.

use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::config::{AlertMode, GuardConfig};
use crate::logic::page::{AlertQueue, Form, Page, PageError, SubmitOutcome};
use crate::logic::validator::{self, SubmitGuard};
use crate::models::profile::{Profile, ProfileField};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Page holding the profile form.
    pub page: Page,
    /// Guard settings the page was set up with.
    pub config: GuardConfig,
    /// Alert shown in the in-app modal.
    pub alert: Option<String>,
    /// A native alert dialog is open on a command worker.
    pub native_alert_open: bool,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
    /// Profiles accepted by the default submission action.
    pub submissions: usize,
}

impl AppModel {
    /// Build the profile page and queue the submission guard for registration.
    pub fn new(config: GuardConfig) -> Self {
        let mut page = Page::new(vec![Form::with_inputs(
            ProfileField::ALL.iter().map(|field| field.id()),
        )]);
        // Registration on a page that has not loaded yet only queues the hook.
        if let Err(err) = validator::install(&mut page, SubmitGuard::from_config(&config)) {
            warn!("failed to install submission guard: {err}");
        }

        Self {
            page,
            config,
            ..Default::default()
        }
    }

    /// Current value of a profile input; empty when the form is missing.
    pub fn field(&self, field: ProfileField) -> &str {
        self.page
            .first_form()
            .and_then(|form| form.value(field.id()))
            .unwrap_or_default()
    }

    /// Whether an alert currently blocks the form.
    pub fn is_blocked(&self) -> bool {
        self.alert.is_some() || self.native_alert_open
    }

    fn profile(&self) -> Profile {
        Profile::from_lookup(|field| Some(self.field(field).to_string()))
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    ContentLoaded,
    FieldChanged(ProfileField, String),
    SubmitRequested,
    AlertDismissed,
    NativeAlertClosed,
    SubmitCompleted(Result<Profile, String>),
}

/// Commands represent side-effects executed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ShowAlert(String),
    SubmitProfile(Profile),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::ContentLoaded => {
            for err in model.page.content_loaded() {
                surface_event(model, format!("Page setup failed: {err}"), true);
            }
        }
        Msg::FieldChanged(field, value) => {
            let result = match model.page.first_form_mut() {
                Some(form) => form.set_value(field.id(), value),
                None => Err(PageError::NoForm),
            };
            if let Err(err) = result {
                warn!("dropping edit of `{}`: {err}", field.id());
            }
        }
        Msg::SubmitRequested => submit(model, cmds),
        Msg::AlertDismissed => model.alert = None,
        Msg::NativeAlertClosed => model.native_alert_open = false,
        Msg::SubmitCompleted(result) => match result {
            Ok(profile) => {
                model.submissions += 1;
                surface_event(model, format!("Profile submitted for {}.", profile.name), false);
            }
            Err(err) => surface_event(model, format!("Failed to submit profile:\n\n{err}"), true),
        },
    }
}

/// Dispatch the form's submit event and act on the outcome.
fn submit(model: &mut AppModel, cmds: &mut Vec<Command>) {
    if model.is_blocked() {
        debug!("ignoring submit while an alert is open");
        return;
    }

    let Some(form) = model.page.first_form() else {
        surface_event(model, "There is no form to submit.".to_string(), true);
        return;
    };

    let mut alerts = AlertQueue::default();
    match form.submit(&mut alerts) {
        SubmitOutcome::Proceed => {
            let profile = model.profile();
            info!("submitting profile");
            cmds.push(Command::SubmitProfile(profile));
        }
        SubmitOutcome::Cancelled => {
            model.status = Some("Submission blocked.".to_string());
            for message in alerts.into_alerts() {
                match model.config.alert_mode {
                    AlertMode::Modal => model.alert = Some(message),
                    AlertMode::Native => {
                        model.native_alert_open = true;
                        cmds.push(Command::ShowAlert(message));
                    }
                }
            }
        }
    }
}

/// Execute a command and return a resulting message.
///
/// The native alert blocks the calling worker until the user closes it.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::ShowAlert(message) => {
            let _ = rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Profile")
                .set_description(&message)
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
            Msg::NativeAlertClosed
        }
        Command::SubmitProfile(profile) => {
            let stdout = std::io::stdout();
            let res = write_profile(&mut stdout.lock(), &profile).map(|_| profile);
            Msg::SubmitCompleted(res.map_err(|e| format!("{e:#}")))
        }
    }
}

/// Default submission action: one JSON line per accepted profile.
fn write_profile(out: &mut impl Write, profile: &Profile) -> Result<()> {
    serde_json::to_writer(&mut *out, profile).context("Failed to encode profile")?;
    writeln!(out).context("Failed to write profile")?;
    out.flush().context("Failed to flush profile output")?;
    Ok(())
}

/// Update status/alert fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.alert = Some(message.clone());
    }
    model.status = Some(message);
}
