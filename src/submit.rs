//! Async form submission.
//!
//! The form is posted as multipart data while its submit button shows a
//! spinner. A 2xx response is applied to the page through a
//! [`ResponseStrategy`]; anything else shows one danger alert and puts the
//! button back.
//!
//! The button is only disabled once the handler runs, so a fast double
//! click can still start two submissions.

use std::future::Future;

use log::{debug, error, warn};

use crate::alert::{Alert, Severity};
use crate::config::SubmitSettings;
use crate::error::SubmitError;

/// How a successful response body is applied to the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResponseStrategy {
    /// Swap the whole document body for the response. The submit button
    /// goes away with the old body, so it is not restored.
    #[default]
    ReplaceView,
    /// Write the response into the element with this id and restore the
    /// button. Falls back to `ReplaceView` if the element is missing.
    PatchView { target_id: String },
}

/// What a successful submission did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Replaced,
    Patched,
}

/// A response as far as submission cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Response text. Only read for successful statuses.
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the serialized form.
pub trait Transport {
    type Payload;

    fn post(
        &self,
        endpoint: &str,
        payload: Self::Payload,
    ) -> impl Future<Output = Result<HttpReply, SubmitError>>;
}

/// The form and page elements submission touches.
pub trait SubmitView {
    type Payload;

    /// Serialize the form as multipart data.
    fn payload(&self) -> Result<Self::Payload, SubmitError>;
    /// Disable the submit button and show `busy_html`. Returns the
    /// button's original content.
    fn begin_busy(&self, busy_html: &str) -> String;
    /// Re-enable the submit button with its original content.
    fn end_busy(&self, original_html: &str);
    fn replace_page(&self, html: &str);
    /// Set the content of the element `target_id`. Returns `false` if it
    /// does not exist.
    fn patch(&self, target_id: &str, html: &str) -> bool;
    fn show_alert(&self, alert: &Alert);
}

/// Run one submission of the form behind `view` to `endpoint`.
pub async fn submit_form<V, T>(
    view: &V,
    transport: &T,
    endpoint: &str,
    settings: &SubmitSettings,
) -> Result<SubmitOutcome, SubmitError>
where
    V: SubmitView + ?Sized,
    T: Transport<Payload = V::Payload> + ?Sized,
{
    let original = view.begin_busy(&settings.busy_html);

    let result = match view.payload() {
        Ok(payload) => match transport.post(endpoint, payload).await {
            Ok(reply) if reply.is_success() => Ok(reply.body),
            Ok(reply) => Err(SubmitError::Status(reply.status)),
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(body) => {
            debug!("{endpoint} answered with {} bytes", body.len());
            Ok(apply_response(view, &settings.strategy, &body, &original))
        }
        Err(e) => {
            error!("form submission error: {e}");
            view.show_alert(&Alert::new(
                settings.failure_message.clone(),
                Severity::Danger,
            ));
            view.end_busy(&original);
            Err(e)
        }
    }
}

fn apply_response<V: SubmitView + ?Sized>(
    view: &V,
    strategy: &ResponseStrategy,
    body: &str,
    original: &str,
) -> SubmitOutcome {
    match strategy {
        ResponseStrategy::ReplaceView => {
            view.replace_page(body);
            SubmitOutcome::Replaced
        }
        ResponseStrategy::PatchView { target_id } => {
            if view.patch(target_id, body) {
                view.end_busy(original);
                SubmitOutcome::Patched
            } else {
                warn!("patch target #{target_id} missing, replacing page");
                view.replace_page(body);
                SubmitOutcome::Replaced
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeForm {
        fields: Vec<(&'static str, &'static str)>,
        button_html: RefCell<String>,
        button_disabled: RefCell<bool>,
        body: RefCell<String>,
        targets: RefCell<HashMap<String, String>>,
        alerts: RefCell<Vec<Alert>>,
    }

    impl FakeForm {
        fn new() -> Self {
            Self {
                fields: vec![("height", "180"), ("weight", "75")],
                button_html: RefCell::new("Analyze".to_string()),
                button_disabled: RefCell::new(false),
                body: RefCell::new("<form>...</form>".to_string()),
                targets: RefCell::new(HashMap::new()),
                alerts: RefCell::new(Vec::new()),
            }
        }
    }

    impl SubmitView for FakeForm {
        type Payload = Vec<(&'static str, &'static str)>;

        fn payload(&self) -> Result<Self::Payload, SubmitError> {
            Ok(self.fields.clone())
        }
        fn begin_busy(&self, busy_html: &str) -> String {
            *self.button_disabled.borrow_mut() = true;
            self.button_html.replace(busy_html.to_string())
        }
        fn end_busy(&self, original_html: &str) {
            *self.button_disabled.borrow_mut() = false;
            *self.button_html.borrow_mut() = original_html.to_string();
        }
        fn replace_page(&self, html: &str) {
            *self.body.borrow_mut() = html.to_string();
        }
        fn patch(&self, target_id: &str, html: &str) -> bool {
            match self.targets.borrow_mut().get_mut(target_id) {
                Some(content) => {
                    *content = html.to_string();
                    true
                }
                None => false,
            }
        }
        fn show_alert(&self, alert: &Alert) {
            self.alerts.borrow_mut().push(alert.clone());
        }
    }

    /// Answers every post with a canned result and records what it saw.
    struct FakeServer {
        reply: Result<HttpReply, SubmitError>,
        seen: RefCell<Vec<(String, Vec<(&'static str, &'static str)>)>>,
    }

    impl FakeServer {
        fn answering(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply {
                    status,
                    body: body.to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                reply: Err(SubmitError::Transport("connection refused".to_string())),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for FakeServer {
        type Payload = Vec<(&'static str, &'static str)>;

        async fn post(
            &self,
            endpoint: &str,
            payload: Self::Payload,
        ) -> Result<HttpReply, SubmitError> {
            self.seen.borrow_mut().push((endpoint.to_string(), payload));
            self.reply.clone()
        }
    }

    #[test]
    fn test_success_replaces_page() {
        let form = FakeForm::new();
        let server = FakeServer::answering(200, "<h1>Results</h1>");
        let settings = SubmitSettings::default();

        let outcome = block_on(submit_form(&form, &server, "/analyze", &settings)).unwrap();
        assert_eq!(outcome, SubmitOutcome::Replaced);
        assert_eq!(*form.body.borrow(), "<h1>Results</h1>");
        assert!(form.alerts.borrow().is_empty());
        // the old body, button included, is gone; no restore happens
        assert!(*form.button_disabled.borrow());

        let seen = server.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "/analyze");
        assert_eq!(seen[0].1, vec![("height", "180"), ("weight", "75")]);
    }

    #[test]
    fn test_any_2xx_is_success() {
        let form = FakeForm::new();
        let server = FakeServer::answering(204, "");
        let settings = SubmitSettings::default();
        assert!(block_on(submit_form(&form, &server, "/a", &settings)).is_ok());
        assert_eq!(*form.body.borrow(), "");
    }

    #[test]
    fn test_error_status_alerts_once_and_restores() {
        let form = FakeForm::new();
        let server = FakeServer::answering(500, "boom");
        let settings = SubmitSettings::default();

        let err = block_on(submit_form(&form, &server, "/analyze", &settings)).unwrap_err();
        assert_eq!(err, SubmitError::Status(500));

        let alerts = form.alerts.borrow();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Danger);
        assert_eq!(alerts[0].message, settings.failure_message);
        assert_eq!(*form.button_html.borrow(), "Analyze");
        assert!(!*form.button_disabled.borrow());
        assert_eq!(*form.body.borrow(), "<form>...</form>");
    }

    #[test]
    fn test_transport_failure_alerts_once_and_restores() {
        let form = FakeForm::new();
        let server = FakeServer::unreachable();
        let settings = SubmitSettings::default();

        let err = block_on(submit_form(&form, &server, "/analyze", &settings)).unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
        assert_eq!(form.alerts.borrow().len(), 1);
        assert_eq!(*form.button_html.borrow(), "Analyze");
        assert!(!*form.button_disabled.borrow());
    }

    #[test]
    fn test_patch_view_updates_target_and_restores() {
        let form = FakeForm::new();
        form.targets
            .borrow_mut()
            .insert("results".to_string(), String::new());
        let server = FakeServer::answering(200, "<p>BMI 23.1</p>");
        let settings = SubmitSettings {
            strategy: ResponseStrategy::PatchView {
                target_id: "results".to_string(),
            },
            ..SubmitSettings::default()
        };

        let outcome = block_on(submit_form(&form, &server, "/analyze", &settings)).unwrap();
        assert_eq!(outcome, SubmitOutcome::Patched);
        assert_eq!(form.targets.borrow()["results"], "<p>BMI 23.1</p>");
        assert_eq!(*form.body.borrow(), "<form>...</form>");
        assert_eq!(*form.button_html.borrow(), "Analyze");
        assert!(!*form.button_disabled.borrow());
    }

    #[test]
    fn test_patch_view_missing_target_replaces() {
        let form = FakeForm::new();
        let server = FakeServer::answering(200, "<p>done</p>");
        let settings = SubmitSettings {
            strategy: ResponseStrategy::PatchView {
                target_id: "nowhere".to_string(),
            },
            ..SubmitSettings::default()
        };

        let outcome = block_on(submit_form(&form, &server, "/analyze", &settings)).unwrap();
        assert_eq!(outcome, SubmitOutcome::Replaced);
        assert_eq!(*form.body.borrow(), "<p>done</p>");
    }

    #[test]
    fn test_busy_label_shown_during_request() {
        struct Probe<'a> {
            form: &'a FakeForm,
            during: RefCell<Option<(String, bool)>>,
        }
        impl Transport for Probe<'_> {
            type Payload = Vec<(&'static str, &'static str)>;
            async fn post(&self, _: &str, _: Self::Payload) -> Result<HttpReply, SubmitError> {
                *self.during.borrow_mut() = Some((
                    self.form.button_html.borrow().clone(),
                    *self.form.button_disabled.borrow(),
                ));
                Err(SubmitError::Status(404))
            }
        }

        let form = FakeForm::new();
        let probe = Probe {
            form: &form,
            during: RefCell::new(None),
        };
        let settings = SubmitSettings::default();
        let _ = block_on(submit_form(&form, &probe, "/x", &settings));

        let (html, disabled) = probe.during.borrow().clone().unwrap();
        assert_eq!(html, settings.busy_html);
        assert!(disabled);
    }
}
