// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page and form model the submission guard is attached to.
//!
//! A [`Page`] owns its forms and a queue of content-loaded hooks. Hooks run
//! exactly once, when the UI shell reports that the page structure is ready.
//! Forms dispatch a [`SubmitEvent`] to their listeners; any listener may
//! cancel the default submission.

use log::{debug, warn};
use thiserror::Error;

use crate::logic::validator::FieldProvider;

/// Structural problems with the page a hook expected to find.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("page has no form element")]
    NoForm,
    #[error("form has no element with id `{0}`")]
    NoSuchElement(String),
}

/// Receives user-facing notifications raised while handling a submission.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Notifier that records alerts so the caller can surface them later.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertQueue {
    alerts: Vec<String>,
}

impl AlertQueue {
    #[cfg(test)]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn into_alerts(self) -> Vec<String> {
        self.alerts
    }
}

impl Notifier for AlertQueue {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// A single submission attempt as seen by listeners.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the form's default submission for this attempt.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What happens to the default submission after all listeners ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed,
    Cancelled,
}

/// Handler invoked on every submission attempt of a form.
pub trait SubmitListener {
    fn on_submit(
        &self,
        fields: &dyn FieldProvider,
        event: &mut SubmitEvent,
        notifier: &mut dyn Notifier,
    );
}

/// Text input element with a stable id.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Input {
    id: String,
    value: String,
}

/// Form element holding inputs and submit listeners.
#[derive(Default)]
pub struct Form {
    inputs: Vec<Input>,
    listeners: Vec<Box<dyn SubmitListener>>,
}

impl Form {
    /// Create a form with empty inputs for the given element ids.
    pub fn with_inputs<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: ids
                .into_iter()
                .map(|id| Input {
                    id: id.into(),
                    value: String::new(),
                })
                .collect(),
            listeners: Vec::new(),
        }
    }

    /// Current value of the input with `id`.
    pub fn value(&self, id: &str) -> Option<&str> {
        self.inputs
            .iter()
            .find(|input| input.id == id)
            .map(|input| input.value.as_str())
    }

    /// Replace the value of the input with `id`.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), PageError> {
        let input = self
            .inputs
            .iter_mut()
            .find(|input| input.id == id)
            .ok_or_else(|| PageError::NoSuchElement(id.to_string()))?;
        input.value = value.into();
        Ok(())
    }

    pub fn add_submit_listener(&mut self, listener: impl SubmitListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch one submission attempt to every listener in registration order.
    pub fn submit(&self, notifier: &mut dyn Notifier) -> SubmitOutcome {
        let mut event = SubmitEvent::new();
        for listener in &self.listeners {
            listener.on_submit(self, &mut event, notifier);
        }

        if event.default_prevented() {
            debug!("submission cancelled by a listener");
            SubmitOutcome::Cancelled
        } else {
            SubmitOutcome::Proceed
        }
    }
}

impl FieldProvider for Form {
    fn field_value(&self, id: &str) -> Option<String> {
        self.value(id).map(str::to_string)
    }
}

type LoadHook = Box<dyn FnOnce(&mut Page) -> Result<(), PageError>>;

/// Document owning the forms and the content-loaded lifecycle.
#[derive(Default)]
pub struct Page {
    forms: Vec<Form>,
    loaded: bool,
    hooks: Vec<LoadHook>,
}

impl Page {
    pub fn new(forms: Vec<Form>) -> Self {
        Self {
            forms,
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Run `hook` once the page content is available.
    ///
    /// Hooks registered after the page loaded run immediately and their
    /// result is returned; queued hooks report through [`Page::content_loaded`].
    pub fn on_content_loaded(
        &mut self,
        hook: impl FnOnce(&mut Page) -> Result<(), PageError> + 'static,
    ) -> Result<(), PageError> {
        if self.loaded {
            return hook(self);
        }
        self.hooks.push(Box::new(hook));
        Ok(())
    }

    /// Mark the content as loaded and run queued hooks in registration order.
    ///
    /// Returns the errors of failed hooks. Calling this again is a no-op.
    pub fn content_loaded(&mut self) -> Vec<PageError> {
        if self.loaded {
            return Vec::new();
        }
        self.loaded = true;

        let hooks = std::mem::take(&mut self.hooks);
        let mut failures = Vec::new();
        for hook in hooks {
            if let Err(err) = hook(self) {
                warn!("content-loaded hook failed: {err}");
                failures.push(err);
            }
        }
        failures
    }

    pub fn first_form(&self) -> Option<&Form> {
        self.forms.first()
    }

    pub fn first_form_mut(&mut self) -> Option<&mut Form> {
        self.forms.first_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct Canceller;

    impl SubmitListener for Canceller {
        fn on_submit(
            &self,
            _fields: &dyn FieldProvider,
            event: &mut SubmitEvent,
            notifier: &mut dyn Notifier,
        ) {
            event.prevent_default();
            notifier.alert("nope");
        }
    }

    #[test]
    fn set_value_rejects_unknown_element() {
        let mut form = Form::with_inputs(["name"]);

        assert!(form.set_value("name", "Alice").is_ok());
        assert_eq!(form.value("name"), Some("Alice"));
        assert_eq!(
            form.set_value("email", "a@b.c"),
            Err(PageError::NoSuchElement("email".into()))
        );
    }

    #[test]
    fn submit_without_listeners_proceeds() {
        let form = Form::with_inputs(["name"]);
        let mut alerts = AlertQueue::default();

        assert_eq!(form.submit(&mut alerts), SubmitOutcome::Proceed);
        assert!(alerts.alerts().is_empty());
    }

    #[test]
    fn listener_can_cancel_submission() {
        let mut form = Form::with_inputs(["name"]);
        form.add_submit_listener(Canceller);
        let mut alerts = AlertQueue::default();

        assert_eq!(form.submit(&mut alerts), SubmitOutcome::Cancelled);
        assert_eq!(alerts.into_alerts(), vec!["nope".to_string()]);
    }

    #[test]
    fn hooks_wait_for_content_loaded_and_run_once() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut page = Page::new(vec![Form::default()]);

        for tag in ["first", "second"] {
            let calls = Rc::clone(&calls);
            page.on_content_loaded(move |_| {
                calls.borrow_mut().push(tag);
                Ok(())
            })
            .unwrap();
        }
        assert!(calls.borrow().is_empty());

        assert!(page.content_loaded().is_empty());
        assert!(page.content_loaded().is_empty());

        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn hook_registered_after_load_runs_immediately() {
        let mut page = Page::new(Vec::new());
        page.content_loaded();

        let result = page.on_content_loaded(|page| {
            page.first_form_mut().map(|_| ()).ok_or(PageError::NoForm)
        });

        assert_eq!(result, Err(PageError::NoForm));
    }

    #[test]
    fn failing_hooks_are_reported() {
        let mut page = Page::new(Vec::new());
        page.on_content_loaded(|_| Err(PageError::NoForm)).unwrap();

        assert_eq!(page.content_loaded(), vec![PageError::NoForm]);
        assert!(page.is_loaded());
    }
}
