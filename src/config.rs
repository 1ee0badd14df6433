//! Page configuration.
//!
//! Every element id, selector, delay and user-facing string the page
//! behavior relies on lives here. `PageConfig::default()` matches the
//! BodyTune templates.

use crate::submit::ResponseStrategy;

/// Element ids and selectors the behavior looks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub upload_area_id: String,
    pub file_input_id: String,
    pub height_id: String,
    pub weight_id: String,
    pub bmi_id: String,
    pub bmi_indicator_id: String,
    pub validated_forms: String,
    pub score_values: String,
    pub progress_bars: String,
    pub container: String,
    pub anchor_links: String,
    /// Class toggled on the drop zone while dragging over it.
    pub dragover_class: String,
    /// Class added to a form after a submit attempt.
    pub validated_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            upload_area_id: "uploadArea".to_string(),
            file_input_id: "file".to_string(),
            height_id: "height".to_string(),
            weight_id: "weight".to_string(),
            bmi_id: "bmi".to_string(),
            bmi_indicator_id: "bmi-indicator".to_string(),
            validated_forms: ".needs-validation".to_string(),
            score_values: ".health-score-value".to_string(),
            progress_bars: ".progress-bar".to_string(),
            container: ".container".to_string(),
            anchor_links: "a[href^=\"#\"]".to_string(),
            dragover_class: "dragover".to_string(),
            validated_class: "was-validated".to_string(),
        }
    }
}

/// Animation and banner timings, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub counter_tick_ms: u32,
    /// Number of equal increments a counter takes to reach its target.
    pub counter_steps: u32,
    pub progress_delay_ms: u32,
    pub alert_dismiss_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            counter_tick_ms: 20,
            counter_steps: 50,
            progress_delay_ms: 500,
            alert_dismiss_ms: 5000,
        }
    }
}

/// Strings and response handling for async form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSettings {
    /// Submit button content while the request is in flight.
    pub busy_html: String,
    pub failure_message: String,
    pub strategy: ResponseStrategy,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            busy_html: "<span class=\"spinner-border spinner-border-sm me-2\" role=\"status\"></span>Processing..."
                .to_string(),
            failure_message:
                "An error occurred while processing your request. Please try again.".to_string(),
            strategy: ResponseStrategy::ReplaceView,
        }
    }
}

/// What the share action shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSettings {
    pub title: String,
    pub text: String,
    /// Success banner after the clipboard fallback.
    pub copied_message: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            title: "My BodyTune AI Health Analysis".to_string(),
            text: "Check out my personalized health recommendations from BodyTune AI!"
                .to_string(),
            copied_message: "Link copied to clipboard!".to_string(),
        }
    }
}

/// Everything the page behavior is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub timings: Timings,
    pub submit: SubmitSettings,
    pub share: ShareSettings,
    /// Inline color applied to text that would otherwise be invisible.
    pub dark_text_color: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            timings: Timings::default(),
            submit: SubmitSettings::default(),
            share: ShareSettings::default(),
            dark_text_color: "#212529".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let t = Timings::default();
        assert_eq!(t.counter_tick_ms, 20);
        assert_eq!(t.counter_steps, 50);
        assert_eq!(t.progress_delay_ms, 500);
        assert_eq!(t.alert_dismiss_ms, 5000);
    }

    #[test]
    fn test_default_selectors_match_templates() {
        let s = Selectors::default();
        assert_eq!(s.upload_area_id, "uploadArea");
        assert_eq!(s.file_input_id, "file");
        assert_eq!(s.container, ".container");
        assert_eq!(s.anchor_links, "a[href^=\"#\"]");
    }

    #[test]
    fn test_default_submit_replaces_view() {
        let config = PageConfig::default();
        assert_eq!(config.submit.strategy, ResponseStrategy::ReplaceView);
        assert!(config.submit.busy_html.ends_with("Processing..."));
        assert_eq!(config.dark_text_color, "#212529");
    }
}
