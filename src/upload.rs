//! Drag-and-drop upload area.
//!
//! The drop zone highlights while something is dragged over it. Dropping or
//! picking a file hands the list to the real file input and shows a single
//! confirmation line under the zone.

use log::debug;

use crate::number::to_fixed;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// The part of a selected file the confirmation shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Size in MiB, two decimals, e.g. `"1.00 MB"`.
    pub fn size_label(&self) -> String {
        format_size(self.size_bytes)
    }

    /// Inner HTML of the confirmation banner.
    pub fn confirmation_html(&self) -> String {
        format!(
            "<i class=\"fas fa-file-check me-2\"></i><strong>File Selected:</strong> {} ({})",
            escape_html(&self.name),
            self.size_label()
        )
    }
}

/// Format a byte count as MiB with two decimals.
pub fn format_size(bytes: u64) -> String {
    format!("{} MB", to_fixed(bytes as f64 / BYTES_PER_MIB, 2))
}

/// Escape text for interpolation into element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Drag events the drop zone reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragEvent {
    pub const ALL: [DragEvent; 4] = [
        DragEvent::Enter,
        DragEvent::Over,
        DragEvent::Leave,
        DragEvent::Drop,
    ];

    /// DOM event type name.
    pub fn event_type(self) -> &'static str {
        match self {
            DragEvent::Enter => "dragenter",
            DragEvent::Over => "dragover",
            DragEvent::Leave => "dragleave",
            DragEvent::Drop => "drop",
        }
    }

    /// Whether the zone is highlighted after this event.
    pub fn highlights(self) -> bool {
        matches!(self, DragEvent::Enter | DragEvent::Over)
    }
}

/// The elements behind the upload area.
///
/// `Files` is whatever the platform uses for a file list; the area only
/// moves it from the drop event to the input.
pub trait UploadView {
    type Files;

    fn set_highlighted(&self, on: bool);
    /// Make `files` the selection of the underlying file input.
    fn assign_files(&self, files: &Self::Files);
    /// Remove the current confirmation banner, if one is shown.
    fn remove_confirmation(&self);
    fn append_confirmation(&self, html: &str);
}

/// Upload area behavior over a view.
pub struct UploadArea<V> {
    view: V,
}

impl<V: UploadView> UploadArea<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handle one drag event. `dropped` carries the data transfer's files
    /// for `Drop` and is ignored otherwise.
    pub fn on_drag(&self, event: DragEvent, dropped: Option<(&V::Files, Option<SelectedFile>)>) {
        self.view.set_highlighted(event.highlights());
        if event != DragEvent::Drop {
            return;
        }
        if let Some((files, Some(first))) = dropped {
            self.view.assign_files(files);
            self.show(&first);
        }
    }

    /// Handle a change of the file input itself.
    pub fn on_picked(&self, first: Option<SelectedFile>) {
        if let Some(file) = first {
            self.show(&file);
        }
    }

    fn show(&self, file: &SelectedFile) {
        debug!("file selected: {} ({} bytes)", file.name, file.size_bytes);
        self.view.remove_confirmation();
        self.view.append_confirmation(&file.confirmation_html());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeZone {
        highlighted: RefCell<bool>,
        input_files: RefCell<Vec<String>>,
        banners: RefCell<Vec<String>>,
    }

    impl UploadView for FakeZone {
        type Files = Vec<String>;

        fn set_highlighted(&self, on: bool) {
            *self.highlighted.borrow_mut() = on;
        }
        fn assign_files(&self, files: &Vec<String>) {
            *self.input_files.borrow_mut() = files.clone();
        }
        fn remove_confirmation(&self) {
            self.banners.borrow_mut().pop();
        }
        fn append_confirmation(&self, html: &str) {
            self.banners.borrow_mut().push(html.to_string());
        }
    }

    fn drop_one(area: &UploadArea<FakeZone>, name: &str, size: u64) {
        let files = vec![name.to_string()];
        area.on_drag(
            DragEvent::Drop,
            Some((&files, Some(SelectedFile::new(name, size)))),
        );
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(1_048_576), "1.00 MB");
        assert_eq!(format_size(0), "0.00 MB");
        assert_eq!(format_size(5 * 1_048_576 / 2), "2.50 MB");
        assert_eq!(format_size(10_240), "0.01 MB");
        assert_eq!(format_size(131_072), "0.13 MB");
    }

    #[test]
    fn test_confirmation_html() {
        let file = SelectedFile::new("scan.pdf", 1_048_576);
        assert_eq!(
            file.confirmation_html(),
            "<i class=\"fas fa-file-check me-2\"></i><strong>File Selected:</strong> scan.pdf (1.00 MB)"
        );
    }

    #[test]
    fn test_confirmation_escapes_name() {
        let file = SelectedFile::new("<b>&.pdf", 0);
        assert!(file.confirmation_html().contains("&lt;b&gt;&amp;.pdf"));
    }

    #[test]
    fn test_highlight_follows_drag() {
        let area = UploadArea::new(FakeZone::default());
        area.on_drag(DragEvent::Enter, None);
        assert!(*area.view().highlighted.borrow());
        area.on_drag(DragEvent::Over, None);
        assert!(*area.view().highlighted.borrow());
        area.on_drag(DragEvent::Leave, None);
        assert!(!*area.view().highlighted.borrow());
        area.on_drag(DragEvent::Over, None);
        drop_one(&area, "a.pdf", 10);
        assert!(!*area.view().highlighted.borrow());
    }

    #[test]
    fn test_drop_populates_input_and_single_banner() {
        let area = UploadArea::new(FakeZone::default());
        drop_one(&area, "first.pdf", 1_048_576);
        assert_eq!(*area.view().input_files.borrow(), vec!["first.pdf"]);
        assert_eq!(area.view().banners.borrow().len(), 1);

        drop_one(&area, "second.pdf", 2_097_152);
        let banners = area.view().banners.borrow();
        assert_eq!(banners.len(), 1);
        assert!(banners[0].contains("second.pdf (2.00 MB)"));
        assert_eq!(*area.view().input_files.borrow(), vec!["second.pdf"]);
    }

    #[test]
    fn test_empty_drop_only_unhighlights() {
        let area = UploadArea::new(FakeZone::default());
        area.on_drag(DragEvent::Enter, None);
        let empty: Vec<String> = Vec::new();
        area.on_drag(DragEvent::Drop, Some((&empty, None)));
        assert!(!*area.view().highlighted.borrow());
        assert!(area.view().input_files.borrow().is_empty());
        assert!(area.view().banners.borrow().is_empty());
    }

    #[test]
    fn test_picked_file_replaces_banner() {
        let area = UploadArea::new(FakeZone::default());
        area.on_picked(Some(SelectedFile::new("one.csv", 100)));
        area.on_picked(None);
        area.on_picked(Some(SelectedFile::new("two.csv", 200)));
        let banners = area.view().banners.borrow();
        assert_eq!(banners.len(), 1);
        assert!(banners[0].contains("two.csv"));
    }

    #[test]
    fn test_event_type_names() {
        let names: Vec<_> = DragEvent::ALL.iter().map(|e| e.event_type()).collect();
        assert_eq!(names, ["dragenter", "dragover", "dragleave", "drop"]);
    }
}
