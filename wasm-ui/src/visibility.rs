//! Fix text that renders white on a light background.

use bodytune::visibility::{
    COLORED_CONTAINERS, DARK_TEXT_CLASS, LIGHT_CONTAINERS, TEXT_ELEMENTS, WHITE_TEXT_CLASS,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::error::UiError;
use crate::page::Page;

pub fn fix_text_visibility(page: &Page) -> Result<(), UiError> {
    let dark = &page.config().dark_text_color;

    for element in page.query_all(&format!(".{WHITE_TEXT_CLASS}"))? {
        let in_light = element.closest(LIGHT_CONTAINERS)?.is_some();
        let in_colored = element.closest(COLORED_CONTAINERS)?.is_some();
        if bodytune::should_swap_white_text(in_light, in_colored) {
            let classes = element.class_list();
            classes.remove_1(WHITE_TEXT_CLASS)?;
            classes.add_1(DARK_TEXT_CLASS)?;
        }
    }

    for card in page.query_all(".card-body")? {
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };
        let style = card.style();
        if style.get_property_value("color")?.is_empty() {
            style.set_property("color", dark)?;
        }
    }

    let mut fixed = 0;
    for element in page.query_all(TEXT_ELEMENTS)? {
        let Some(computed) = page.window().get_computed_style(&element)? else {
            continue;
        };
        let color = computed.get_property_value("color")?;
        let background = computed.get_property_value("background-color")?;
        if !bodytune::needs_dark_text(&color, &background) {
            continue;
        }
        if let Ok(el) = element.dyn_into::<HtmlElement>() {
            el.style().set_property("color", dark)?;
            fixed += 1;
        }
    }
    if fixed > 0 {
        log::debug!("darkened {fixed} white-on-white text elements");
    }
    Ok(())
}
