//! Client-side validation gate for forms marked for validation.

use log::debug;

/// A form with native constraint validation.
pub trait ValidatedForm {
    /// Run the browser's required-field and pattern checks.
    fn check_validity(&self) -> bool;
    /// Add the marker class that makes invalid fields show their state.
    fn mark_validated(&self);
}

/// Decide a submit attempt. Returns `true` when the submission may
/// proceed; on `false` the caller cancels the event.
///
/// The form is marked validated either way, so fields show their state
/// after the first attempt.
pub fn allow_submit<F: ValidatedForm + ?Sized>(form: &F) -> bool {
    let valid = form.check_validity();
    if !valid {
        debug!("form failed validation, cancelling submit");
    }
    form.mark_validated();
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeForm {
        valid: bool,
        marked: Cell<bool>,
    }

    impl ValidatedForm for FakeForm {
        fn check_validity(&self) -> bool {
            self.valid
        }
        fn mark_validated(&self) {
            self.marked.set(true);
        }
    }

    #[test]
    fn test_invalid_form_blocked_and_marked() {
        let form = FakeForm {
            valid: false,
            marked: Cell::new(false),
        };
        assert!(!allow_submit(&form));
        assert!(form.marked.get());
    }

    #[test]
    fn test_valid_form_passes() {
        let form = FakeForm {
            valid: true,
            marked: Cell::new(false),
        };
        assert!(allow_submit(&form));
        assert!(form.marked.get());
    }
}
