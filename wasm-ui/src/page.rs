//! The document the behavior is bound to, plus DOM helpers shared by the
//! feature modules.

use std::cell::RefCell;
use std::rc::Rc;

use bodytune::{Alert, AlertHost, Banner, PageConfig, Scheduler};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::UiError;

thread_local! {
    static CONFIG: RefCell<Rc<PageConfig>> = RefCell::new(Rc::new(PageConfig::default()));
}

/// Handle on the current document and the configuration it was set up
/// with. Cheap to clone.
#[derive(Clone)]
pub struct Page {
    window: Window,
    document: Document,
    config: Rc<PageConfig>,
}

impl Page {
    pub fn new(config: PageConfig) -> Self {
        Self {
            window: gloo::utils::window(),
            document: gloo::utils::document(),
            config: Rc::new(config),
        }
    }

    /// The page as configured by the last `init_page` call.
    pub fn current() -> Self {
        let config = CONFIG.with(|c| Rc::clone(&c.borrow()));
        Self {
            window: gloo::utils::window(),
            document: gloo::utils::document(),
            config,
        }
    }

    /// Make this page's configuration the one `current` returns.
    pub(crate) fn make_current(&self) {
        CONFIG.with(|c| *c.borrow_mut() = Rc::clone(&self.config));
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Element with `id`, if it exists and has type `T`.
    pub fn element<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, UiError> {
        let list = self.document.query_selector_all(selector)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    pub fn alerts(&self) -> PageAlerts {
        PageAlerts {
            document: self.document.clone(),
            container: self.config.selectors.container.clone(),
        }
    }

    /// Show a banner with the configured auto-dismiss delay.
    pub fn show_alert(&self, alert: &Alert) -> bool {
        bodytune::show_alert(
            &self.alerts(),
            &TimeoutScheduler,
            alert,
            self.config.timings.alert_dismiss_ms,
        )
    }
}

/// Runs deferred work on `setTimeout`.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// Banners go into the first element matching the container selector.
#[derive(Clone)]
pub struct PageAlerts {
    document: Document,
    container: String,
}

pub struct DomBanner(Element);

impl Banner for DomBanner {
    fn is_attached(&self) -> bool {
        self.0.parent_node().is_some()
    }

    fn remove(&self) {
        self.0.remove();
    }
}

impl AlertHost for PageAlerts {
    type Banner = DomBanner;

    fn insert_banner(&self, alert: &Alert) -> Option<DomBanner> {
        let container = self.document.query_selector(&self.container).ok()??;
        let div = self.document.create_element("div").ok()?;
        div.set_class_name(&alert.class_name());
        div.set_attribute("role", "alert").ok()?;
        div.set_inner_html(&alert.inner_html());
        container
            .insert_before(&div, container.first_child().as_ref())
            .ok()?;
        Some(DomBanner(div))
    }
}
