//! Async submission of a form to an endpoint, with the response applied to
//! the page.

use std::rc::Rc;

use bodytune::{Alert, HttpReply, SubmitError, SubmitView, Transport};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlButtonElement, HtmlFormElement};

use crate::error::{UiError, js_message};
use crate::page::Page;

/// A form, its submit button and the page around it.
pub struct DomForm {
    page: Page,
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
}

impl DomForm {
    pub fn new(page: Page, form: HtmlFormElement) -> Self {
        let button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Self { page, form, button }
    }
}

impl SubmitView for DomForm {
    type Payload = FormData;

    fn payload(&self) -> Result<FormData, SubmitError> {
        FormData::new_with_form(&self.form).map_err(|e| SubmitError::Transport(js_message(&e)))
    }

    fn begin_busy(&self, busy_html: &str) -> String {
        let Some(button) = &self.button else {
            return String::new();
        };
        let original = button.inner_html();
        button.set_inner_html(busy_html);
        button.set_disabled(true);
        original
    }

    fn end_busy(&self, original_html: &str) {
        if let Some(button) = &self.button {
            button.set_inner_html(original_html);
            button.set_disabled(false);
        }
    }

    fn replace_page(&self, html: &str) {
        if let Some(body) = self.page.document().body() {
            body.set_inner_html(html);
        }
    }

    fn patch(&self, target_id: &str, html: &str) -> bool {
        match self.page.document().get_element_by_id(target_id) {
            Some(target) => {
                target.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn show_alert(&self, alert: &Alert) {
        self.page.show_alert(alert);
    }
}

/// Posts multipart form data with `fetch`.
pub struct FetchTransport;

impl FetchTransport {
    async fn send(&self, endpoint: &str, payload: FormData) -> Result<HttpReply, UiError> {
        let response = Request::post(endpoint).body(payload)?.send().await?;
        let status = response.status();
        if !response.ok() {
            return Ok(HttpReply {
                status,
                body: String::new(),
            });
        }
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}

impl Transport for FetchTransport {
    type Payload = FormData;

    async fn post(&self, endpoint: &str, payload: FormData) -> Result<HttpReply, SubmitError> {
        self.send(endpoint, payload)
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))
    }
}

/// Submit the form with id `form_id` to `endpoint` asynchronously instead
/// of navigating. A missing form is ignored.
pub fn attach(page: &Page, form_id: &str, endpoint: &str) {
    let Some(form) = page.element::<HtmlFormElement>(form_id) else {
        log::debug!("no form #{form_id}, async submit not attached");
        return;
    };
    let view = Rc::new(DomForm::new(page.clone(), form.clone()));
    let endpoint = endpoint.to_string();

    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let view = Rc::clone(&view);
            let endpoint = endpoint.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let settings = view.page.config().submit.clone();
                let _ = bodytune::submit_form(&*view, &FetchTransport, &endpoint, &settings).await;
            });
        },
    )
    .forget();
}
