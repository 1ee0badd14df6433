//! Drop zone wiring for the report upload form.

use std::rc::Rc;

use bodytune::{DragEvent, SelectedFile, UploadArea, UploadView};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, FileList, HtmlElement, HtmlInputElement};

use crate::error::UiError;
use crate::page::Page;

const CONFIRMATION_CLASS: &str = "alert alert-success mt-3";

/// The drop zone, the file input it feeds and the confirmation slot under
/// it.
pub struct DropZone {
    document: Document,
    zone: HtmlElement,
    input: HtmlInputElement,
    dragover_class: String,
}

impl DropZone {
    fn confirmation_parent(&self) -> Option<web_sys::Element> {
        self.zone.parent_element()
    }
}

impl UploadView for DropZone {
    type Files = FileList;

    fn set_highlighted(&self, on: bool) {
        let _ = self
            .zone
            .class_list()
            .toggle_with_force(&self.dragover_class, on);
    }

    fn assign_files(&self, files: &FileList) {
        self.input.set_files(Some(files));
    }

    fn remove_confirmation(&self) {
        let existing = self
            .confirmation_parent()
            .and_then(|parent| parent.query_selector(".alert-success").ok().flatten());
        if let Some(existing) = existing {
            existing.remove();
        }
    }

    fn append_confirmation(&self, html: &str) {
        let Some(parent) = self.confirmation_parent() else {
            return;
        };
        let Ok(info) = self.document.create_element("div") else {
            return;
        };
        info.set_class_name(CONFIRMATION_CLASS);
        info.set_inner_html(html);
        let _ = parent.append_child(&info);
    }
}

/// First file of a list, as the confirmation describes it.
pub fn first_file(files: &FileList) -> Option<SelectedFile> {
    let file = files.get(0)?;
    Some(SelectedFile::new(file.name(), file.size() as u64))
}

/// Wire drag-and-drop and the file picker. A page without the drop zone or
/// the file input is left alone.
pub fn wire(page: &Page) -> Result<(), UiError> {
    let selectors = &page.config().selectors;
    let (Some(zone), Some(input)) = (
        page.element::<HtmlElement>(&selectors.upload_area_id),
        page.element::<HtmlInputElement>(&selectors.file_input_id),
    ) else {
        return Ok(());
    };

    let area = Rc::new(UploadArea::new(DropZone {
        document: page.document().clone(),
        zone: zone.clone(),
        input: input.clone(),
        dragover_class: selectors.dragover_class.clone(),
    }));
    let body = page.document().body();

    for kind in DragEvent::ALL {
        let area = Rc::clone(&area);
        EventListener::new_with_options(
            &zone,
            kind.event_type(),
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                event.stop_propagation();
                let files = event
                    .dyn_ref::<web_sys::DragEvent>()
                    .and_then(web_sys::DragEvent::data_transfer)
                    .and_then(|transfer| transfer.files());
                let dropped = files.as_ref().map(|list| (list, first_file(list)));
                area.on_drag(kind, dropped);
            },
        )
        .forget();

        // A drop that misses the zone must not navigate to the file.
        if let Some(body) = &body {
            EventListener::new_with_options(
                body,
                kind.event_type(),
                EventListenerOptions::enable_prevent_default(),
                |event| {
                    event.prevent_default();
                    event.stop_propagation();
                },
            )
            .forget();
        }
    }

    EventListener::new(&input, "change", move |_| {
        let picked = area.view().input.files();
        area.on_picked(picked.as_ref().and_then(first_file));
    })
    .forget();

    log::debug!("upload area wired");
    Ok(())
}
