//! Share action with clipboard fallback, and in-page anchor scrolling.

use std::future::Future;

use log::{debug, warn};

use crate::alert::{Alert, Severity};
use crate::config::ShareSettings;

/// Payload for the native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    pub fn for_page(settings: &ShareSettings, url: impl Into<String>) -> Self {
        Self {
            title: settings.title.clone(),
            text: settings.text.clone(),
            url: url.into(),
        }
    }
}

/// Browser capabilities the share action uses.
pub trait ShareCapability {
    /// Whether a native share sheet exists.
    fn can_share(&self) -> bool;
    fn share(&self, data: &ShareData) -> impl Future<Output = Result<(), String>>;
    fn copy_text(&self, text: &str) -> impl Future<Output = Result<(), String>>;
    fn show_alert(&self, alert: &Alert);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user closed the share sheet or the browser refused.
    ShareAborted,
    Copied,
    CopyFailed,
}

/// Share the page at `url`, copying the link when native share is missing.
pub async fn share_page<C: ShareCapability + ?Sized>(
    capability: &C,
    settings: &ShareSettings,
    url: &str,
) -> ShareOutcome {
    if capability.can_share() {
        let data = ShareData::for_page(settings, url);
        return match capability.share(&data).await {
            Ok(()) => ShareOutcome::Shared,
            Err(e) => {
                debug!("share sheet closed: {e}");
                ShareOutcome::ShareAborted
            }
        };
    }

    match capability.copy_text(url).await {
        Ok(()) => {
            capability.show_alert(&Alert::new(
                settings.copied_message.clone(),
                Severity::Success,
            ));
            ShareOutcome::Copied
        }
        Err(e) => {
            warn!("clipboard write failed: {e}");
            ShareOutcome::CopyFailed
        }
    }
}

/// Selector for the element an in-page link points at.
///
/// Returns `None` for a bare `#` or anything that is not a fragment link.
pub fn anchor_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(href)
    }
}
