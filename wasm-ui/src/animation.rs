//! Score counters and progress bars.

use std::cell::RefCell;
use std::rc::Rc;

use bodytune::{CounterAnimation, ProgressBar};
use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::error::UiError;
use crate::page::{Page, TimeoutScheduler};

/// Count every score element up from zero to its rendered value.
pub fn animate_scores(page: &Page) -> Result<(), UiError> {
    let timings = page.config().timings;
    for element in page.query_all(&page.config().selectors.score_values)? {
        let text = element.text_content().unwrap_or_default();
        let Some(frames) = CounterAnimation::from_text(&text, timings.counter_steps) else {
            log::warn!("score element holds {text:?}, not animating");
            continue;
        };
        element.set_text_content(Some("0"));
        run_counter(element, frames, timings.counter_tick_ms);
    }
    Ok(())
}

/// Drive one counter on an interval until its last frame.
pub fn run_counter(element: Element, mut frames: CounterAnimation, tick_ms: u32) {
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let stop = Rc::clone(&slot);
    let interval = Interval::new(tick_ms, move || {
        if let Some(value) = frames.next() {
            element.set_text_content(Some(&value.to_string()));
        }
        if frames.is_done() {
            // The interval owns this closure; drop it outside the call.
            if let Some(interval) = stop.borrow_mut().take() {
                Timeout::new(0, move || drop(interval)).forget();
            }
        }
    });
    *slot.borrow_mut() = Some(interval);
}

struct StyledBar(HtmlElement);

impl ProgressBar for StyledBar {
    fn width(&self) -> String {
        self.0.style().get_property_value("width").unwrap_or_default()
    }

    fn set_width(&self, width: &str) {
        let _ = self.0.style().set_property("width", width);
    }
}

/// Collapse every progress bar and restore it after the configured delay.
pub fn animate_progress_bars(page: &Page) -> Result<(), UiError> {
    let delay = page.config().timings.progress_delay_ms;
    for element in page.query_all(&page.config().selectors.progress_bars)? {
        let Ok(bar) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        bodytune::reveal_progress(StyledBar(bar), &TimeoutScheduler, delay);
    }
    Ok(())
}
