//! Fixed-window call budget shared by every request routed through one limiter.
//!
//! The limiter counts calls inside a window of `window` duration. Once
//! `budget` calls have been counted, the next caller sleeps until the window
//! has elapsed and then opens a fresh window. A rate-limit response from the
//! server forces the same reset through [`FixedWindowLimiter::back_off`].
//!
//! State lives behind a mutex and sleeping happens while the lock is held,
//! so concurrent callers queue behind a back-off instead of racing the
//! counter.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const DEFAULT_BUDGET: u32 = 100;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(120);

/// Time source used by the limiter. Swapped for a manual clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateWindow {
    pub call_count: u32,
    pub window_start: Instant,
}

impl RateWindow {
    fn restart(&mut self, now: Instant) {
        self.call_count = 1;
        self.window_start = now;
    }
}

#[derive(Debug)]
struct LimiterState {
    budget: u32,
    window_len: Duration,
    window: RateWindow,
}

pub struct FixedWindowLimiter {
    clock: Arc<dyn Clock>,
    state: Mutex<LimiterState>,
}

impl FixedWindowLimiter {
    pub fn new(budget: u32, window: Duration) -> Self {
        Self::with_clock(budget, window, Arc::new(SystemClock))
    }

    pub fn with_clock(budget: u32, window: Duration, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        FixedWindowLimiter {
            clock,
            state: Mutex::new(LimiterState {
                budget: budget.max(1),
                window_len: window,
                window: RateWindow {
                    call_count: 0,
                    window_start: now,
                },
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LimiterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adjust the budget and window length. Takes effect on the next call.
    pub fn set_limits(&self, budget: u32, window: Duration) {
        let mut state = self.lock();
        state.budget = budget.max(1);
        state.window_len = window;
    }

    pub fn limits(&self) -> (u32, Duration) {
        let state = self.lock();
        (state.budget, state.window_len)
    }

    pub fn window(&self) -> RateWindow {
        self.lock().window
    }

    /// Count one call, blocking first if the current window is spent.
    /// Returns how long the caller was held back.
    pub fn acquire(&self) -> Duration {
        let mut state = self.lock();
        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(state.window.window_start);

        if elapsed >= state.window_len {
            state.window.restart(now);
            return Duration::ZERO;
        }

        if state.window.call_count >= state.budget {
            let remaining = state.window_len - elapsed;
            warn!(
                budget = state.budget,
                window_secs = state.window_len.as_secs(),
                wait_ms = remaining.as_millis() as u64,
                "call budget exhausted, sleeping until the window closes"
            );
            self.clock.sleep(remaining);
            let resumed = self.clock.now();
            state.window.restart(resumed);
            return remaining;
        }

        state.window.call_count += 1;
        debug!(
            call_count = state.window.call_count,
            budget = state.budget,
            "rate window call counted"
        );
        Duration::ZERO
    }

    /// Reaction to a server-side 429: sleep a full window and start a new one
    /// in which the retried call is the first.
    pub fn back_off(&self) {
        let mut state = self.lock();
        warn!(
            window_secs = state.window_len.as_secs(),
            "server reported rate limit, sleeping a full window"
        );
        self.clock.sleep(state.window_len);
        let resumed = self.clock.now();
        state.window.restart(resumed);
    }

    /// Sleep a full window without touching the counter. Used when an
    /// unmetered call gets throttled.
    pub fn pause(&self) {
        let window = self.lock().window_len;
        self.clock.sleep(window);
    }
}

impl Default for FixedWindowLimiter {
    fn default() -> Self {
        FixedWindowLimiter::new(DEFAULT_BUDGET, DEFAULT_WINDOW)
    }
}
