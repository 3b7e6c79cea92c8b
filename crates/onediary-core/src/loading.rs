//! Loading-phase state machine and pulse animation driver
//!
//! The loading screen shows [`DOT_COUNT`] dots pulsing in a staggered,
//! infinite loop until a one-shot ready timer fires, at which point the
//! screen switches to the feed and never switches back.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ LoadingController                                        │
//! │  ├── inner: Arc<Inner>                                   │
//! │  │    ├── phase: Mutex<Phase>        (Loading → Ready)   │
//! │  │    ├── signals: [AtomicU64; N]    (f64 bits, [0,1])   │
//! │  │    └── on_ready: Mutex<Vec<FnOnce>>                   │
//! │  └── tasks: Arc<Mutex<TaskSet>>                          │
//! │       ├── pulses: Vec<JoinHandle>    (one per dot)       │
//! │       └── ready_timer: Option<JoinHandle>                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Each pulse task owns exactly one signal cell; the renderer only reads.
//! The ready timer is unsynchronized with the pulse tasks, so a pulse may be
//! cut off mid-cycle when the transition occurs. Teardown is deterministic:
//! both the ready transition and [`LoadingController::stop`] abort their
//! tasks through the stored handles, so no signal update fires after the
//! owning screen is gone.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Number of pulsing dots in the loading indicator.
pub const DOT_COUNT: usize = 3;

/// Offset between the start of consecutive dot loops.
pub const STAGGER: Duration = Duration::from_millis(200);

/// Duration of each ramp half (0→1, then 1→0).
pub const RAMP: Duration = Duration::from_millis(400);

/// Delay before the feed is considered ready.
pub const READY_DELAY: Duration = Duration::from_millis(1500);

/// Signal update cadence (~60 fps).
pub const FRAME: Duration = Duration::from_millis(16);

/// Loading-screen phase. `Ready` is terminal: the transition happens exactly
/// once and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

type ReadyCallback = Box<dyn FnOnce() + Send>;

/// State shared between the controller handle and its background tasks.
struct Inner {
    phase: Mutex<Phase>,
    /// f64 bit patterns; each cell is written only by its own pulse task and
    /// read by the renderer.
    signals: [AtomicU64; DOT_COUNT],
    on_ready: Mutex<Vec<ReadyCallback>>,
}

impl Inner {
    fn signal(&self, index: usize) -> f64 {
        f64::from_bits(self.signals[index].load(Ordering::Relaxed))
    }

    fn set_signal(&self, index: usize, value: f64) {
        let clamped = value.clamp(0.0, 1.0);
        self.signals[index].store(clamped.to_bits(), Ordering::Relaxed);
    }
}

/// Handles to every outstanding scheduled task.
#[derive(Default)]
struct TaskSet {
    started: bool,
    pulses: Vec<JoinHandle<()>>,
    ready_timer: Option<JoinHandle<()>>,
}

/// Drives the staggered pulsing-dot loop and the one-shot loading → ready
/// transition.
///
/// Scoped to one screen instance: call [`start`](Self::start) on mount and
/// [`stop`](Self::stop) on teardown. `start` must be called from within a
/// tokio runtime.
pub struct LoadingController {
    inner: Arc<Inner>,
    tasks: Arc<Mutex<TaskSet>>,
}

impl LoadingController {
    /// Create a controller in the `Loading` phase with all signals at 0.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                phase: Mutex::new(Phase::Loading),
                // f64 0.0 has an all-zero bit pattern
                signals: [const { AtomicU64::new(0) }; DOT_COUNT],
                on_ready: Mutex::new(Vec::new()),
            }),
            tasks: Arc::new(Mutex::new(TaskSet::default())),
        }
    }

    /// Start the pulse tasks and the single-shot ready timer.
    ///
    /// Idempotent: calling twice never double-starts the tasks or makes the
    /// ready transition fire more than once.
    pub fn start(&self) {
        let mut tasks = self.tasks.lock();
        if tasks.started {
            tracing::debug!("loading controller already started");
            return;
        }
        tasks.started = true;

        for index in 0..DOT_COUNT {
            let inner = Arc::clone(&self.inner);
            tasks.pulses.push(tokio::spawn(pulse_loop(inner, index)));
        }

        let inner = Arc::clone(&self.inner);
        let task_set = Arc::clone(&self.tasks);
        tasks.ready_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(READY_DELAY).await;
            transition_ready(&inner, &task_set);
        }));

        tracing::debug!(dots = DOT_COUNT, "loading animation started");
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        *self.inner.phase.lock()
    }

    /// Current value of signal `index`, in [0, 1].
    ///
    /// # Panics
    ///
    /// Panics if `index >= DOT_COUNT`.
    pub fn signal(&self, index: usize) -> f64 {
        self.inner.signal(index)
    }

    /// Snapshot of all signal values.
    pub fn signals(&self) -> [f64; DOT_COUNT] {
        std::array::from_fn(|index| self.inner.signal(index))
    }

    /// Register a callback invoked exactly once when the controller
    /// transitions to `Ready`.
    ///
    /// A callback registered after the transition fires immediately.
    pub fn on_ready(&self, callback: impl FnOnce() + Send + 'static) {
        // Hold the phase lock while registering so the transition cannot
        // drain the callback list between the check and the push.
        let phase = self.inner.phase.lock();
        if *phase == Phase::Ready {
            drop(phase);
            callback();
        } else {
            self.inner.on_ready.lock().push(Box::new(callback));
        }
    }

    /// Cancel every outstanding task: pulse loops and, if it has not fired,
    /// the ready timer. Pending `on_ready` callbacks are dropped unfired.
    ///
    /// Must be called on screen teardown; idempotent.
    pub fn stop(&self) {
        let mut tasks = self.tasks.lock();
        for pulse in tasks.pulses.drain(..) {
            pulse.abort();
        }
        if let Some(timer) = tasks.ready_timer.take() {
            timer.abort();
        }
        self.inner.on_ready.lock().clear();
        tracing::debug!("loading controller stopped");
    }
}

impl Default for LoadingController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoadingController {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The sole loading → ready transition. Guarded by the phase lock so it can
/// run at most once.
fn transition_ready(inner: &Inner, tasks: &Mutex<TaskSet>) {
    {
        let mut phase = inner.phase.lock();
        if *phase == Phase::Ready {
            return;
        }
        *phase = Phase::Ready;
    }

    // The dots are no longer visible; stop producing signal updates.
    for pulse in tasks.lock().pulses.drain(..) {
        pulse.abort();
    }

    let callbacks: Vec<ReadyCallback> = std::mem::take(&mut *inner.on_ready.lock());
    tracing::info!("loading complete, switching to feed");
    for callback in callbacks {
        callback();
    }
}

/// One dot's infinite pulse: idle for the stagger offset, then ramp the
/// signal 0→1 and back 1→0 over [`RAMP`] each way, forever.
async fn pulse_loop(inner: Arc<Inner>, index: usize) {
    tokio::time::sleep(STAGGER * index as u32).await;

    let started = tokio::time::Instant::now();
    let mut frames = tokio::time::interval(FRAME);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let half_ms = RAMP.as_millis() as f64;
    let cycle_ms = half_ms * 2.0;

    loop {
        frames.tick().await;
        let pos = (started.elapsed().as_secs_f64() * 1000.0) % cycle_ms;
        let linear = if pos < half_ms {
            pos / half_ms
        } else {
            2.0 - pos / half_ms
        };
        inner.set_signal(index, ease_in_out(linear));
    }
}

/// Smoothstep easing, monotonic on [0, 1] so each ramp half pulses rather
/// than snaps.
fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
