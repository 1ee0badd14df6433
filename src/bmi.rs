//! Live BMI calculation.
//!
//! Height is entered in centimetres, weight in kilograms. The calculator
//! reruns on every edit of either field; when one of them does not hold a
//! positive number the previous output is left as it is.

use std::fmt;

use log::{debug, trace};

use crate::error::ParseError;
use crate::number::to_fixed;

/// Body Mass Index, weight(kg) / height(m)^2.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bmi(f64);

impl Bmi {
    /// Compute BMI from height in centimetres and weight in kilograms.
    ///
    /// Returns `None` unless both inputs are finite and positive.
    pub fn from_metric(height_cm: f64, weight_kg: f64) -> Option<Self> {
        if !is_positive(height_cm) || !is_positive(weight_kg) {
            return None;
        }
        let height_m = height_cm / 100.0;
        let value = weight_kg / (height_m * height_m);
        value.is_finite().then_some(Bmi(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Category of the unrounded value.
    pub fn category(self) -> BmiCategory {
        BmiCategory::classify(self.0)
    }

    /// The value as written into the output field: one decimal place.
    pub fn display(self) -> String {
        to_fixed(self.0, 1)
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Four-band BMI classification.
///
/// Each band includes its lower bound and excludes its upper bound; the
/// top band is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    pub const NORMAL_BELOW: f64 = 25.0;
    pub const OVERWEIGHT_BELOW: f64 = 30.0;

    pub fn classify(bmi: f64) -> Self {
        if bmi < Self::UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < Self::NORMAL_BELOW {
            BmiCategory::Normal
        } else if bmi < Self::OVERWEIGHT_BELOW {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Text color class used for the category label.
    pub fn css_class(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "text-info",
            BmiCategory::Normal => "text-success",
            BmiCategory::Overweight => "text-warning",
            BmiCategory::Obese => "text-danger",
        }
    }

    /// Inner HTML of the category indicator element.
    pub fn indicator_html(self) -> String {
        format!(
            "BMI Category: <span class=\"{}\">{}</span>",
            self.css_class(),
            self.label()
        )
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Read the leading decimal number of a form field value.
///
/// Leading whitespace is skipped and trailing junk is ignored, so `"170cm"`
/// reads as `170.0`. Text with no numeric prefix is an error.
pub fn parse_number(text: &str) -> Result<f64, ParseError> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return Err(ParseError::NotANumber(text.to_string()));
    }

    // Exponent only counts when it carries digits: "1e" reads as 1.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .map_err(|_| ParseError::NotANumber(text.to_string()))
}

/// Read a measurement that must be a positive number.
pub fn parse_measurement(text: &str) -> Result<f64, ParseError> {
    let value = parse_number(text)?;
    if is_positive(value) {
        Ok(value)
    } else {
        Err(ParseError::NotPositive(text.trim().to_string()))
    }
}

/// The form fields the calculator reads and writes.
pub trait BmiView {
    fn height_text(&self) -> String;
    fn weight_text(&self) -> String;
    /// Write the rounded value into the read-only output field.
    fn set_bmi_text(&self, text: &str);
    /// Create the category indicator if needed and set its content.
    fn show_category(&self, category: BmiCategory);
}

/// Recompute BMI from the current field values.
///
/// Returns the new reading, or `None` when the inputs were not usable and
/// the view was not touched.
pub fn recompute<V: BmiView + ?Sized>(view: &V) -> Option<Bmi> {
    let height = parse_measurement(&view.height_text());
    let weight = parse_measurement(&view.weight_text());
    let (height, weight) = match (height, weight) {
        (Ok(h), Ok(w)) => (h, w),
        (h, w) => {
            trace!("bmi inputs not ready: height={h:?} weight={w:?}");
            return None;
        }
    };

    let bmi = Bmi::from_metric(height, weight)?;
    let category = bmi.category();
    debug!("bmi {bmi} ({category}) from {height}cm / {weight}kg");
    view.set_bmi_text(&bmi.display());
    view.show_category(category);
    Some(bmi)
}
