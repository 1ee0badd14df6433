//! Share, print and in-page scrolling.

use bodytune::{Alert, ShareCapability, ShareData};
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::{UiError, js_message};
use crate::page::Page;

/// `navigator.share` and `navigator.clipboard`, looked up at call time so
/// browsers lacking either still load the module.
pub struct BrowserShare {
    page: Page,
}

impl BrowserShare {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    fn navigator(&self) -> JsValue {
        self.page.window().navigator().into()
    }
}

/// Call `target[name](...args)` and await the promise it returns.
async fn call_async(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, String> {
    let method = Reflect::get(target, &JsValue::from_str(name)).map_err(|e| js_message(&e))?;
    let method: Function = method
        .dyn_into()
        .map_err(|_| format!("{name} is not a function"))?;
    let promise: Promise = method
        .apply(target, args)
        .map_err(|e| js_message(&e))?
        .dyn_into()
        .map_err(|_| format!("{name} did not return a promise"))?;
    JsFuture::from(promise).await.map_err(|e| js_message(&e))
}

impl ShareCapability for BrowserShare {
    fn can_share(&self) -> bool {
        Reflect::has(&self.navigator(), &JsValue::from_str("share")).unwrap_or(false)
    }

    async fn share(&self, data: &ShareData) -> Result<(), String> {
        let payload = Object::new();
        for (key, value) in [("title", &data.title), ("text", &data.text), ("url", &data.url)] {
            Reflect::set(&payload, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|e| js_message(&e))?;
        }
        call_async(&self.navigator(), "share", &Array::of1(&payload))
            .await
            .map(|_| ())
    }

    async fn copy_text(&self, text: &str) -> Result<(), String> {
        let clipboard = Reflect::get(&self.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|e| js_message(&e))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err("clipboard unavailable".to_string());
        }
        call_async(&clipboard, "writeText", &Array::of1(&JsValue::from_str(text)))
            .await
            .map(|_| ())
    }

    fn show_alert(&self, alert: &Alert) {
        self.page.show_alert(alert);
    }
}

/// Share the current page URL.
pub fn share_current(page: &Page) -> Result<(), UiError> {
    let url = page.window().location().href()?;
    let page = page.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let browser = BrowserShare::new(page.clone());
        let outcome = bodytune::share_page(&browser, &page.config().share, &url).await;
        log::debug!("share finished: {outcome:?}");
    });
    Ok(())
}

pub fn print(page: &Page) -> Result<(), UiError> {
    page.window().print()?;
    Ok(())
}

/// Smooth-scroll to the target of in-page `#fragment` links.
pub fn wire_smooth_scrolling(page: &Page) -> Result<(), UiError> {
    for anchor in page.query_all(&page.config().selectors.anchor_links)? {
        let document = page.document().clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(selector) = bodytune::anchor_target(&href) else {
                    return;
                };
                if let Ok(Some(target)) = document.query_selector(selector) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            },
        )
        .forget();
    }
    Ok(())
}
