//! Dismissible alert banners.
//!
//! A banner goes in as the first child of the page container and removes
//! itself after a timeout unless the user closed it first.

use std::fmt;

use log::debug;

use crate::timer::Scheduler;

/// Bootstrap contextual color of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    Primary,
    Secondary,
    Light,
    Dark,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
            Severity::Primary => "primary",
            Severity::Secondary => "secondary",
            Severity::Light => "light",
            Severity::Dark => "dark",
        }
    }

    /// Parse a severity name as passed from a host page. Unknown names
    /// give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let severity = match name.trim().to_ascii_lowercase().as_str() {
            "info" => Severity::Info,
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" => Severity::Danger,
            "primary" => Severity::Primary,
            "secondary" => Severity::Secondary,
            "light" => Severity::Light,
            "dark" => Severity::Dark,
            _ => return None,
        };
        Some(severity)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message to show. The message is markup and is inserted as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub severity: Severity,
}

impl Alert {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn class_name(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.severity)
    }

    pub fn inner_html(&self) -> String {
        format!(
            "{}<button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\"></button>",
            self.message
        )
    }
}

/// An inserted banner.
pub trait Banner {
    fn is_attached(&self) -> bool;
    fn remove(&self);
}

/// Where banners are inserted.
pub trait AlertHost {
    type Banner: Banner + 'static;

    /// Insert a banner at the top of the page container. Returns `None`
    /// when the page has no container.
    fn insert_banner(&self, alert: &Alert) -> Option<Self::Banner>;
}

/// Show `alert` and schedule its removal after `dismiss_ms`.
///
/// Returns `false` when there was nowhere to put it.
pub fn show_alert<H, S>(host: &H, scheduler: &S, alert: &Alert, dismiss_ms: u32) -> bool
where
    H: AlertHost + ?Sized,
    S: Scheduler + ?Sized,
{
    let Some(banner) = host.insert_banner(alert) else {
        debug!("no alert container, dropping {} alert", alert.severity);
        return false;
    };
    scheduler.after(
        dismiss_ms,
        Box::new(move || {
            if banner.is_attached() {
                banner.remove();
            }
        }),
    );
    true
}
