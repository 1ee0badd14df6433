//! Live BMI field.

use std::rc::Rc;

use bodytune::{BmiCategory, BmiView};
use gloo::events::EventListener;
use web_sys::{Document, HtmlInputElement};

use crate::error::UiError;
use crate::page::Page;

pub struct BmiForm {
    document: Document,
    height: HtmlInputElement,
    weight: HtmlInputElement,
    bmi: HtmlInputElement,
    indicator_id: String,
}

impl BmiView for BmiForm {
    fn height_text(&self) -> String {
        self.height.value()
    }

    fn weight_text(&self) -> String {
        self.weight.value()
    }

    fn set_bmi_text(&self, text: &str) {
        self.bmi.set_value(text);
    }

    fn show_category(&self, category: BmiCategory) {
        let indicator = match self.document.get_element_by_id(&self.indicator_id) {
            Some(el) => el,
            None => {
                let (Ok(el), Some(parent)) = (
                    self.document.create_element("div"),
                    self.bmi.parent_node(),
                ) else {
                    return;
                };
                el.set_id(&self.indicator_id);
                el.set_class_name("form-text");
                if parent.append_child(&el).is_err() {
                    return;
                }
                el
            }
        };
        indicator.set_inner_html(&category.indicator_html());
    }
}

/// Recompute on every edit of height or weight.
pub fn wire(page: &Page) -> Result<(), UiError> {
    let selectors = &page.config().selectors;
    let (Some(height), Some(weight), Some(bmi)) = (
        page.element::<HtmlInputElement>(&selectors.height_id),
        page.element::<HtmlInputElement>(&selectors.weight_id),
        page.element::<HtmlInputElement>(&selectors.bmi_id),
    ) else {
        return Ok(());
    };

    let form = Rc::new(BmiForm {
        document: page.document().clone(),
        height: height.clone(),
        weight: weight.clone(),
        bmi,
        indicator_id: selectors.bmi_indicator_id.clone(),
    });

    for field in [&height, &weight] {
        let form = Rc::clone(&form);
        EventListener::new(field, "input", move |_| {
            bodytune::recompute(&*form);
        })
        .forget();
    }
    Ok(())
}
