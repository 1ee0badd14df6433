//! Submit gate for `.needs-validation` forms.

use bodytune::ValidatedForm;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::error::UiError;
use crate::page::Page;

struct NativeForm<'a> {
    form: &'a HtmlFormElement,
    validated_class: &'a str,
}

impl ValidatedForm for NativeForm<'_> {
    fn check_validity(&self) -> bool {
        self.form.check_validity()
    }

    fn mark_validated(&self) {
        let _ = self.form.class_list().add_1(self.validated_class);
    }
}

pub fn wire(page: &Page) -> Result<(), UiError> {
    let selectors = &page.config().selectors;
    for form in page.query_all(&selectors.validated_forms)? {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let validated_class = selectors.validated_class.clone();
        let target = form.clone();
        EventListener::new_with_options(
            &target,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let native = NativeForm {
                    form: &form,
                    validated_class: &validated_class,
                };
                if !bodytune::allow_submit(&native) {
                    event.prevent_default();
                    event.stop_propagation();
                }
            },
        )
        .forget();
    }
    Ok(())
}
