//! # bodytune
//!
//! Page behavior for the BodyTune health metrics form.
//!
//! Everything here is platform independent. Each behavior talks to the page
//! through a small view trait (`BmiView`, `UploadView`, `AlertHost`,
//! `SubmitView`, ...), so it runs natively under test and in the browser
//! through the `bodytune-ui` crate's `web-sys` bindings.
//!
//! ## Example
//!
//! ```
//! use bodytune::{Bmi, BmiCategory, format_size};
//!
//! let bmi = Bmi::from_metric(170.0, 65.0).unwrap();
//! assert_eq!(bmi.display(), "22.5");
//! assert_eq!(bmi.category(), BmiCategory::Normal);
//!
//! assert_eq!(format_size(1_048_576), "1.00 MB");
//! ```

pub mod alert;
pub mod bmi;
pub mod config;
pub mod counter;
pub mod error;
pub mod number;
pub mod share;
pub mod submit;
pub mod timer;
pub mod upload;
pub mod validation;
pub mod visibility;

pub use alert::{Alert, AlertHost, Banner, Severity, show_alert};
pub use bmi::{Bmi, BmiCategory, BmiView, parse_measurement, parse_number, recompute};
pub use config::{PageConfig, Selectors, ShareSettings, SubmitSettings, Timings};
pub use counter::{CounterAnimation, ProgressBar, parse_leading_int, reveal_progress};
pub use error::{ParseError, SubmitError};
pub use number::to_fixed;
pub use share::{ShareCapability, ShareData, ShareOutcome, anchor_target, share_page};
pub use submit::{
    HttpReply, ResponseStrategy, SubmitOutcome, SubmitView, Transport, submit_form,
};
pub use timer::Scheduler;
pub use upload::{DragEvent, SelectedFile, UploadArea, UploadView, escape_html, format_size};
pub use validation::{ValidatedForm, allow_submit};
pub use visibility::{Rgba, needs_dark_text, should_swap_white_text};
