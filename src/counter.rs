//! Score counter and progress bar animations.
//!
//! A counter counts up from zero to the number it was rendered with, in a
//! fixed number of equal steps on a fixed tick. The step count, not wall
//! time, decides how many frames run. Progress bars are collapsed to zero
//! width and restored after a delay so their CSS transition plays.

use crate::timer::Scheduler;

/// Frames of one counter animation.
///
/// Yields the text to display on each tick. The last frame is the target
/// itself; every earlier frame is the floor of the running value.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            current: 0.0,
            increment: target as f64 / f64::from(steps),
            done: false,
        }
    }

    /// Build from the element's rendered text. Text without a leading
    /// integer gives `None` and the element is left alone.
    pub fn from_text(text: &str, steps: u32) -> Option<Self> {
        parse_leading_int(text).map(|target| Self::new(target, steps))
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for CounterAnimation {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as i64)
        }
    }
}

/// Read a leading base-10 integer, ignoring surrounding whitespace and any
/// trailing text (`"80%"` reads as 80).
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value: i64 = digits[..len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// A progress bar whose width is replayed after a delay.
pub trait ProgressBar {
    fn width(&self) -> String;
    fn set_width(&self, width: &str);
}

/// Collapse `bar` to `0%` now and restore its original width after
/// `delay_ms`.
pub fn reveal_progress<B, S>(bar: B, scheduler: &S, delay_ms: u32)
where
    B: ProgressBar + 'static,
    S: Scheduler + ?Sized,
{
    let width = bar.width();
    bar.set_width("0%");
    scheduler.after(
        delay_ms,
        Box::new(move || {
            bar.set_width(&width);
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_counter_reaches_target_exactly() {
        let frames: Vec<i64> = CounterAnimation::new(80, 50).collect();
        assert_eq!(frames.last(), Some(&80));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(frames.iter().all(|&v| (0..=80).contains(&v)));
        assert!(frames.len() >= 50 && frames.len() <= 51);
    }

    #[test]
    fn test_counter_small_target() {
        let frames: Vec<i64> = CounterAnimation::new(3, 50).collect();
        assert_eq!(frames.last(), Some(&3));
        assert_eq!(frames[0], 0);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_counter_zero_target_settles_first_frame() {
        let mut anim = CounterAnimation::new(0, 50);
        assert_eq!(anim.next(), Some(0));
        assert!(anim.is_done());
        assert_eq!(anim.next(), None);
    }

    #[test]
    fn test_counter_from_text() {
        let anim = CounterAnimation::from_text(" 72 ", 50).unwrap();
        assert_eq!(anim.target(), 72);
        assert!(CounterAnimation::from_text("n/a", 50).is_none());
        assert!(CounterAnimation::from_text("", 50).is_none());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("80"), Some(80));
        assert_eq!(parse_leading_int("80%"), Some(80));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("7.9"), Some(7));
        assert_eq!(parse_leading_int("x1"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[derive(Clone, Default)]
    struct FakeBar {
        width: Rc<RefCell<String>>,
        history: Rc<RefCell<Vec<String>>>,
    }

    impl ProgressBar for FakeBar {
        fn width(&self) -> String {
            self.width.borrow().clone()
        }
        fn set_width(&self, width: &str) {
            *self.width.borrow_mut() = width.to_string();
            self.history.borrow_mut().push(width.to_string());
        }
    }

    #[test]
    fn test_progress_reveal_restores_after_delay() {
        let scheduler = ManualScheduler::default();
        let bar = FakeBar::default();
        *bar.width.borrow_mut() = "65%".to_string();

        reveal_progress(bar.clone(), &scheduler, 500);
        assert_eq!(*bar.width.borrow(), "0%");

        scheduler.advance(499);
        assert_eq!(*bar.width.borrow(), "0%");
        scheduler.advance(1);
        assert_eq!(*bar.width.borrow(), "65%");
        assert_eq!(*bar.history.borrow(), vec!["0%", "65%"]);
    }
}
