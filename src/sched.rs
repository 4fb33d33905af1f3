//! Fixed-step background driver
//!
//! Runs a caller-supplied tick callback at a target frequency on one
//! background thread. Scheduling is anchored to absolute deadlines: each
//! tick advances the deadline by exactly one interval instead of
//! re-anchoring to "now", so overruns don't accumulate drift. A tick that
//! panics is reported and the loop keeps going.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

type TickFn = Box<dyn FnMut() + Send + 'static>;

/// Drives a per-tick callback at a fixed rate on a background thread.
///
/// `start` is idempotent. `stop` is cooperative: it is observed at the next
/// tick boundary and joins the thread before returning, so it never
/// interrupts a tick in progress.
pub struct FixedStepScheduler {
    interval: Duration,
    running: Arc<AtomicBool>,
    tick_fn: Mutex<Option<TickFn>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl FixedStepScheduler {
    /// Scheduler at `hz` ticks per second invoking `tick_fn` each tick
    pub fn new<F>(hz: u32, tick_fn: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self {
            interval: Duration::from_secs_f64(1.0 / hz.max(1) as f64),
            running: Arc::new(AtomicBool::new(false)),
            tick_fn: Mutex::new(Some(Box::new(tick_fn))),
            handle: Mutex::new(None),
        }
    }

    /// Spawn the tick loop. A second call while running does nothing.
    pub fn start(&self) {
        if self.running.swap(true, Ordering::AcqRel) {
            return;
        }
        let Some(mut tick_fn) = self.tick_fn.lock().expect("tick_fn lock").take() else {
            // Restarted after a previous run; the callback is gone
            self.running.store(false, Ordering::Release);
            log::warn!("scheduler already consumed its callback, start ignored");
            return;
        };

        let running = self.running.clone();
        let interval = self.interval;

        let handle = thread::Builder::new()
            .name("fixed-step".into())
            .spawn(move || {
                log::info!("tick loop started, interval {:?}", interval);
                let mut deadline = Instant::now() + interval;

                while running.load(Ordering::Acquire) {
                    // A single failing tick must never take down the loop
                    if let Err(payload) =
                        panic::catch_unwind(AssertUnwindSafe(&mut tick_fn))
                    {
                        let msg = payload
                            .downcast_ref::<&str>()
                            .copied()
                            .map(String::from)
                            .or_else(|| payload.downcast_ref::<String>().cloned())
                            .unwrap_or_else(|| "non-string panic payload".into());
                        log::error!("tick panicked, continuing: {msg}");
                    }

                    // Sleep out the remainder of the budget; an overrun tick
                    // proceeds straight to the next one
                    let now = Instant::now();
                    if let Some(remaining) = deadline.checked_duration_since(now) {
                        thread::sleep(remaining);
                    }

                    // Advance by one interval, never re-anchor to now
                    deadline += interval;
                }
                log::info!("tick loop stopped");
            })
            .expect("spawn fixed-step thread");

        *self.handle.lock().expect("handle lock") = Some(handle);
    }

    /// True while the tick loop is live
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Signal the loop to stop and wait for it to exit.
    ///
    /// The in-flight tick always finishes; the flag is observed at the next
    /// tick boundary. Safe to call from any thread, and a no-op when the
    /// scheduler isn't running.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.lock().expect("handle lock").take() {
            if handle.join().is_err() {
                // catch_unwind means this shouldn't happen, but a join error
                // must not propagate out of stop
                log::error!("tick thread terminated abnormally");
            }
        }
    }
}

impl Drop for FixedStepScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
