use chrono::{DateTime, TimeZone};
use std::time::Duration;

/// Deferred one-shot callbacks on the UI thread.
pub trait Timer {
    type Handle: 'static;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancels a callback that has not fired yet.
    fn stop(&self, handle: Self::Handle);
}

/// Timer backed by glib timeout sources on the default main context.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlibTimer;

impl Timer for GlibTimer {
    type Handle = glib::SourceId;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> glib::SourceId {
        glib::timeout_add_local_once(delay, callback)
    }

    fn stop(&self, handle: glib::SourceId) {
        handle.remove();
    }
}

/// `hh:mm AM/PM`, the format used for chat bubbles.
pub fn format_time<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%I:%M %p").to_string()
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

#[cfg(test)]
pub mod testing {
    use super::Timer;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    type Callbacks = Rc<RefCell<Vec<Option<Box<dyn FnOnce()>>>>>;

    /// Queues callbacks until the test fires them.
    #[derive(Default, Clone)]
    pub struct ManualTimer {
        pub queued: Callbacks,
        pub stopped: Rc<RefCell<Vec<usize>>>,
    }

    impl ManualTimer {
        pub fn fire(&self, id: usize) {
            let callback = self.queued.borrow_mut()[id].take();
            if let Some(callback) = callback {
                callback();
            }
        }

        pub fn fire_all(&self) {
            let count = self.queued.borrow().len();
            for id in 0..count {
                self.fire(id);
            }
        }
    }

    impl Timer for ManualTimer {
        type Handle = usize;

        fn start(&self, _delay: Duration, callback: Box<dyn FnOnce()>) -> usize {
            let mut queued = self.queued.borrow_mut();
            queued.push(Some(callback));
            queued.len() - 1
        }

        fn stop(&self, handle: usize) {
            self.queued.borrow_mut()[handle] = None;
            self.stopped.borrow_mut().push(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_twelve_hour_clock() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 0).unwrap();
        assert_eq!(format_time(&ts), "02:05 PM");
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_time(&ts), "09:30 AM");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t "));
        assert!(!is_blank(" crop "));
    }
}
