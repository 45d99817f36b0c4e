// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Submission guard for the profile form.
//!
//! Responsibilities:
//! - Read the required field values through a [`FieldProvider`].
//! - Cancel the submission and alert the user when any value is missing.
//! - Stay out of the way when every value is present.
//!
//! Presence is a strict emptiness check: whitespace-only values count as present.

use std::cell::Cell;

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::GuardConfig;
use crate::logic::page::{Notifier, Page, PageError, SubmitEvent, SubmitListener};
use crate::models::profile::ProfileField;

/// Alert text shown when a required field is blank.
pub const REQUIRED_MESSAGE: &str = "All fields are required.";

/// Capability to read the current value of an input by its id.
pub trait FieldProvider {
    /// `None` when no input with `id` exists.
    fn field_value(&self, id: &str) -> Option<String>;
}

/// Single validation failure kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field(s) missing: {}", missing.join(", "))]
    RequiredFieldMissing { missing: Vec<String> },
}

/// Presence check: a value is present when it exists and is non-empty.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Check every id in `required`, listing the missing ones in order.
pub fn check_required(
    fields: &dyn FieldProvider,
    required: &[String],
) -> Result<(), ValidationError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|id| {
            let value = fields.field_value(id);
            if value.is_none() {
                warn!("required input `{id}` not found on form; treating as empty");
            }
            !is_present(value.as_deref())
        })
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::RequiredFieldMissing { missing })
    }
}

/// Lifecycle of the guard around a single submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Idle,
    ValidationInProgress,
}

/// Submit listener that blocks submission while required fields are blank.
#[derive(Debug)]
pub struct SubmitGuard {
    required: Vec<String>,
    message: String,
    state: Cell<GuardState>,
}

impl Default for SubmitGuard {
    fn default() -> Self {
        Self::new(
            ProfileField::ALL.iter().map(|f| f.id().to_string()).collect(),
            REQUIRED_MESSAGE,
        )
    }
}

impl SubmitGuard {
    pub fn new(required: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            required,
            message: message.into(),
            state: Cell::new(GuardState::Idle),
        }
    }

    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(config.required_fields.clone(), config.message.clone())
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    #[cfg(test)]
    pub fn state(&self) -> GuardState {
        self.state.get()
    }
}

impl SubmitListener for SubmitGuard {
    fn on_submit(
        &self,
        fields: &dyn FieldProvider,
        event: &mut SubmitEvent,
        notifier: &mut dyn Notifier,
    ) {
        self.state.set(GuardState::ValidationInProgress);
        let result = check_required(fields, &self.required);
        self.state.set(GuardState::Idle);

        match result {
            Ok(()) => debug!("all required fields present; submission allowed"),
            Err(err) => {
                info!("blocking submission: {err}");
                event.prevent_default();
                notifier.alert(&self.message);
            }
        }
    }
}

/// Attach `guard` to the page's first form once the page content has loaded.
pub fn install(page: &mut Page, guard: SubmitGuard) -> Result<(), PageError> {
    page.on_content_loaded(move |page| {
        let form = page.first_form_mut().ok_or(PageError::NoForm)?;
        info!(
            "submission guard registered for fields: {}",
            guard.required().join(", ")
        );
        form.add_submit_listener(guard);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::logic::page::{AlertQueue, Form, SubmitOutcome};

    /// Field provider backed by a plain map.
    struct MapFields(HashMap<&'static str, &'static str>);

    impl MapFields {
        fn profile(name: &'static str, bio: &'static str, location: &'static str) -> Self {
            Self(HashMap::from([
                ("name", name),
                ("bio", bio),
                ("location", location),
            ]))
        }
    }

    impl FieldProvider for MapFields {
        fn field_value(&self, id: &str) -> Option<String> {
            self.0.get(id).map(|v| v.to_string())
        }
    }

    fn run_guard(fields: &MapFields) -> (SubmitEvent, AlertQueue) {
        let guard = SubmitGuard::default();
        let mut event = SubmitEvent::new();
        let mut alerts = AlertQueue::default();
        guard.on_submit(fields, &mut event, &mut alerts);
        assert_eq!(guard.state(), GuardState::Idle);
        (event, alerts)
    }

    fn profile_page() -> Page {
        Page::new(vec![Form::with_inputs(["name", "bio", "location"])])
    }

    #[test]
    fn presence_check_is_strict_emptiness() {
        assert!(!is_present(None));
        assert!(!is_present(Some("")));
        assert!(is_present(Some(" ")));
        assert!(is_present(Some("Alice")));
    }

    #[test]
    fn any_empty_field_blocks_with_single_alert() {
        let values = ["", "x"];
        for name in values {
            for bio in values {
                for location in values {
                    let fields = MapFields::profile(name, bio, location);
                    let (event, alerts) = run_guard(&fields);
                    let all_present = !name.is_empty() && !bio.is_empty() && !location.is_empty();

                    assert_eq!(event.default_prevented(), !all_present);
                    let expected = if all_present { 0 } else { 1 };
                    assert_eq!(alerts.alerts().len(), expected);
                }
            }
        }
    }

    #[test]
    fn missing_bio_is_blocked() {
        let (event, alerts) = run_guard(&MapFields::profile("Alice", "", "NYC"));

        assert!(event.default_prevented());
        assert_eq!(alerts.alerts(), [REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn complete_profile_is_allowed() {
        let (event, alerts) = run_guard(&MapFields::profile("Alice", "Engineer", "NYC"));

        assert!(!event.default_prevented());
        assert!(alerts.alerts().is_empty());
    }

    #[test]
    fn all_blank_is_blocked() {
        let (event, alerts) = run_guard(&MapFields::profile("", "", ""));

        assert!(event.default_prevented());
        assert_eq!(alerts.alerts().len(), 1);
    }

    #[test]
    fn whitespace_name_counts_as_present() {
        let (event, alerts) = run_guard(&MapFields::profile(" ", "Engineer", "NYC"));

        assert!(!event.default_prevented());
        assert!(alerts.alerts().is_empty());
    }

    #[test]
    fn absent_input_counts_as_missing() {
        let fields = MapFields(HashMap::from([("name", "Alice"), ("bio", "Engineer")]));

        let err = check_required(&fields, SubmitGuard::default().required()).unwrap_err();

        assert_eq!(
            err,
            ValidationError::RequiredFieldMissing {
                missing: vec!["location".into()]
            }
        );
    }

    #[test]
    fn check_required_lists_missing_in_order() {
        let fields = MapFields::profile("", "Engineer", "");

        let err = check_required(&fields, SubmitGuard::default().required()).unwrap_err();

        assert_eq!(err.to_string(), "required field(s) missing: name, location");
    }

    #[test]
    fn guard_is_registered_only_after_content_loaded() {
        let mut page = profile_page();
        install(&mut page, SubmitGuard::default()).unwrap();

        let form = page.first_form().unwrap();
        let mut alerts = AlertQueue::default();
        assert_eq!(form.listener_count(), 0);
        assert_eq!(form.submit(&mut alerts), SubmitOutcome::Proceed);

        assert!(page.content_loaded().is_empty());
        let form = page.first_form().unwrap();
        assert_eq!(form.listener_count(), 1);
        assert_eq!(form.submit(&mut alerts), SubmitOutcome::Cancelled);
        assert_eq!(alerts.alerts().len(), 1);
    }

    #[test]
    fn repeated_invalid_submissions_alert_every_time() {
        let mut page = profile_page();
        install(&mut page, SubmitGuard::default()).unwrap();
        page.content_loaded();

        let form = page.first_form_mut().unwrap();
        form.set_value("name", "Alice").unwrap();
        form.set_value("location", "NYC").unwrap();

        let mut alerts = AlertQueue::default();
        for _ in 0..3 {
            assert_eq!(form.submit(&mut alerts), SubmitOutcome::Cancelled);
        }
        assert_eq!(alerts.alerts().len(), 3);
    }

    #[test]
    fn valid_form_submits_through_installed_guard() {
        let mut page = profile_page();
        install(&mut page, SubmitGuard::default()).unwrap();
        page.content_loaded();

        let form = page.first_form_mut().unwrap();
        form.set_value("name", "Alice").unwrap();
        form.set_value("bio", "Engineer").unwrap();
        form.set_value("location", "NYC").unwrap();

        let mut alerts = AlertQueue::default();
        assert_eq!(form.submit(&mut alerts), SubmitOutcome::Proceed);
        assert!(alerts.alerts().is_empty());
    }

    #[test]
    fn page_without_form_reports_error() {
        let mut page = Page::new(Vec::new());
        install(&mut page, SubmitGuard::default()).unwrap();

        assert_eq!(page.content_loaded(), vec![PageError::NoForm]);
    }

    #[test]
    fn guard_follows_configured_message() {
        let config = GuardConfig {
            required_fields: vec!["name".into()],
            message: "Name please.".into(),
            ..Default::default()
        };
        let guard = SubmitGuard::from_config(&config);
        let mut event = SubmitEvent::new();
        let mut alerts = AlertQueue::default();

        guard.on_submit(&MapFields::profile("", "", ""), &mut event, &mut alerts);

        assert!(event.default_prevented());
        assert_eq!(alerts.alerts(), ["Name please.".to_string()]);
    }
}
