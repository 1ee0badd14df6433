//! Deferred work.
//!
//! Behavior that needs "do this later" asks a [`Scheduler`]. The browser
//! build backs it with `gloo` timeouts; tests drive a manual clock.

/// Runs a task once after a delay. Scheduled tasks cannot be cancelled.
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        (**self).after(delay_ms, task);
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;
