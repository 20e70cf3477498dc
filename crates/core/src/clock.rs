//! Wall-clock source used for token expiry checks

use std::cell::Cell;
use std::rc::Rc;

/// Source of the current time in milliseconds since the Unix epoch
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Clock backed by `chrono::Utc::now`
///
/// In the browser this reads `Date.now()` through chrono's `wasmbind` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Manually driven clock; clones observe the same instant
#[derive(Clone, Debug, Default)]
pub struct FixedClock {
    millis: Rc<Cell<i64>>,
}

impl FixedClock {
    pub fn at_millis(millis: i64) -> Self {
        Self {
            millis: Rc::new(Cell::new(millis)),
        }
    }

    pub fn at_seconds(seconds: i64) -> Self {
        Self::at_millis(seconds * 1000)
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.set(millis);
    }

    pub fn advance_millis(&self, delta: i64) {
        self.millis.set(self.millis.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}
