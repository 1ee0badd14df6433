//! Browser bindings for the BodyTune page behavior.
//!
//! The host page loads the module and calls `init_page()` once. Everything
//! else is optional: `show_alert`, `handle_form_submission`,
//! `share_results` and `print_results` are exported for inline handlers in
//! the templates.

pub mod animation;
pub mod bmi;
pub mod error;
pub mod page;
pub mod share;
pub mod submit;
pub mod upload;
pub mod validation;
pub mod visibility;

use bodytune::{Alert, PageConfig, Severity};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

pub use error::UiError;
pub use page::Page;

type Setup = fn(&Page) -> Result<(), UiError>;

const SETUP: [(&str, Setup); 7] = [
    ("text visibility", visibility::fix_text_visibility),
    ("file upload", upload::wire),
    ("form validation", validation::wire),
    ("bmi calculator", bmi::wire),
    ("score counters", animation::animate_scores),
    ("progress bars", animation::animate_progress_bars),
    ("smooth scrolling", share::wire_smooth_scrolling),
];

/// Module start: route panics and log records to the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Wire every page behavior with the default configuration.
#[wasm_bindgen]
pub fn init_page() {
    init_page_with(PageConfig::default());
}

/// Wire every page behavior. If the document is still loading, wiring waits
/// for `DOMContentLoaded`.
pub fn init_page_with(config: PageConfig) {
    let page = Page::new(config);
    page.make_current();

    if page.document().ready_state() == "loading" {
        let document = page.document().clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| wire(&page)).forget();
    } else {
        wire(&page);
    }
}

/// Run each setup step. A failing step is logged and the rest still run.
pub fn wire(page: &Page) {
    for (name, setup) in SETUP {
        if let Err(e) = setup(page) {
            log::error!("{name} setup failed: {e}");
        }
    }
}

/// Show a dismissible banner at the top of the page container.
/// Unknown severities fall back to `info`.
#[wasm_bindgen]
pub fn show_alert(message: &str, severity: Option<String>) {
    let severity = severity
        .as_deref()
        .and_then(Severity::from_name)
        .unwrap_or_default();
    Page::current().show_alert(&Alert::new(message, severity));
}

/// Submit the form `form_id` to `endpoint` with `fetch` instead of
/// navigating.
#[wasm_bindgen]
pub fn handle_form_submission(form_id: &str, endpoint: &str) {
    submit::attach(&Page::current(), form_id, endpoint);
}

#[wasm_bindgen]
pub fn share_results() {
    if let Err(e) = share::share_current(&Page::current()) {
        log::error!("share failed: {e}");
    }
}

#[wasm_bindgen]
pub fn print_results() {
    if let Err(e) = share::print(&Page::current()) {
        log::error!("print failed: {e}");
    }
}
