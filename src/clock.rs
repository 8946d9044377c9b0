//! Ticking clock with an optional stopwatch session
//!
//! A [`Clock`] publishes the current time once per tick and, while a session is
//! active, the time elapsed since the session started. Observers subscribe to a
//! `watch` channel and always see the latest [`ClockSnapshot`]; a slow observer
//! never delays the ticker.
//!
//! Each tick reads the time source instead of incrementing a counter, so
//! scheduler jitter never accumulates into drift.

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::config::ClockConfig;
use crate::constants::DEFAULT_TICK_INTERVAL_MS;
use crate::utils::interval::secs_from_instant;

/// Errors from managing the ticking task.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("No tokio runtime available to drive the clock")]
    NoRuntime,

    #[error("Clock is already ticking")]
    AlreadyRunning,

    #[error("Tick period must be greater than zero")]
    ZeroPeriod,
}

/// Source of "now" as fractional seconds since the Unix epoch.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> f64;
}

/// Wall clock, read through chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> f64 {
        secs_from_instant(&chrono::Utc::now())
    }
}

/// Time source that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    current: Arc<Mutex<f64>>,
}

impl ManualTimeSource {
    pub fn new(start: f64) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, secs: f64) {
        if let Ok(mut current) = self.current.lock() {
            *current = secs;
        }
    }

    pub fn advance(&self, secs: f64) {
        if let Ok(mut current) = self.current.lock() {
            *current += secs;
        }
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> f64 {
        self.current.lock().map(|current| *current).unwrap_or_default()
    }
}

/// Immutable copy of the clock state handed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClockSnapshot {
    /// Seconds since the Unix epoch at the last tick.
    pub now: f64,
    /// Seconds since the session started, frozen once the session stops.
    pub elapsed: f64,
    pub session_active: bool,
}

#[derive(Debug, Default)]
struct ClockState {
    now: f64,
    elapsed: f64,
    session_start: Option<f64>,
}

impl ClockState {
    fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            now: self.now,
            elapsed: self.elapsed,
            session_active: self.session_start.is_some(),
        }
    }
}

struct Shared {
    state: Mutex<ClockState>,
    publisher: watch::Sender<ClockSnapshot>,
    source: Arc<dyn TimeSource>,
}

impl Shared {
    // The time source is read and the snapshot published while the state
    // guard is held, so publishes happen in the same order as state changes.
    fn tick(&self) {
        let Ok(mut state) = self.state.lock() else {
            warn!("Clock state lock poisoned, skipping tick");
            return;
        };
        let now = self.source.now();
        state.now = now;
        if let Some(start) = state.session_start {
            state.elapsed = now - start;
        }
        let snapshot = state.snapshot();
        self.publish(snapshot);
        drop(state);
        trace!("Clock tick: now={:.3} elapsed={:.3}", snapshot.now, snapshot.elapsed);
    }

    fn start_session(&self) {
        let Ok(mut state) = self.state.lock() else {
            warn!("Clock state lock poisoned, session not started");
            return;
        };
        let now = self.source.now();
        state.elapsed = 0.0;
        state.session_start = Some(now);
        self.publish(state.snapshot());
        drop(state);
        debug!("Clock session started at {:.3}", now);
    }

    fn stop_session(&self) {
        let Ok(mut state) = self.state.lock() else {
            warn!("Clock state lock poisoned, session not stopped");
            return;
        };
        if state.session_start.take().is_none() {
            return;
        }
        let snapshot = state.snapshot();
        self.publish(snapshot);
        drop(state);
        debug!("Clock session stopped after {:.3}s", snapshot.elapsed);
    }

    fn publish(&self, snapshot: ClockSnapshot) {
        // send_replace never blocks and succeeds with zero receivers
        self.publisher.send_replace(snapshot);
    }
}

/// Explicitly owned ticking clock.
///
/// Construct one, hand out subscriptions, then [`start`](Clock::start) it on a
/// tokio runtime. The ticking task stops on [`stop`](Clock::stop) or drop.
pub struct Clock {
    shared: Arc<Shared>,
    period: Duration,
    ticker: Option<JoinHandle<()>>,
}

impl Clock {
    /// Create a clock reading `source`, ticking once per second.
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        Self::with_period(source, Duration::from_millis(DEFAULT_TICK_INTERVAL_MS))
    }

    /// Create a clock with a custom tick period.
    pub fn with_period(source: Arc<dyn TimeSource>, period: Duration) -> Self {
        let state = ClockState {
            now: source.now(),
            ..ClockState::default()
        };
        let (publisher, _) = watch::channel(state.snapshot());
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                publisher,
                source,
            }),
            period,
            ticker: None,
        }
    }

    /// Wall-clock clock ticking once per second.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemTimeSource))
    }

    /// Wall-clock clock using the configured tick interval.
    pub fn with_config(config: &ClockConfig) -> Self {
        Self::with_period(Arc::new(SystemTimeSource), config.tick_interval())
    }

    /// Time between ticks.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Spawn the ticking task on the current tokio runtime.
    pub fn start(&mut self) -> Result<(), ClockError> {
        if self.is_running() {
            return Err(ClockError::AlreadyRunning);
        }
        if self.period.is_zero() {
            return Err(ClockError::ZeroPeriod);
        }
        let handle = tokio::runtime::Handle::try_current().map_err(|_| ClockError::NoRuntime)?;

        let shared = Arc::clone(&self.shared);
        let period = self.period;
        self.ticker = Some(handle.spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                shared.tick();
            }
        }));

        info!("Clock started with a {:?} tick period", self.period);
        Ok(())
    }

    /// Abort the ticking task. Sessions and the last snapshot are kept.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            info!("Clock stopped");
        }
    }

    /// Whether the ticking task is alive.
    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| !ticker.is_finished())
    }

    /// Run one tick immediately.
    pub fn tick(&self) {
        self.shared.tick();
    }

    /// Begin (or restart) a session at the current instant, resetting `elapsed`.
    pub fn start_session(&self) {
        self.shared.start_session();
    }

    /// End the session; `elapsed` keeps its last value.
    pub fn stop_session(&self) {
        self.shared.stop_session();
    }

    /// Latest published state.
    pub fn snapshot(&self) -> ClockSnapshot {
        *self.shared.publisher.borrow()
    }

    /// Instant the current session started, if any.
    pub fn session_start(&self) -> Option<f64> {
        self.shared.state.lock().ok().and_then(|state| state.session_start)
    }

    /// Receive every published snapshot. Drop the receiver to unsubscribe.
    pub fn subscribe(&self) -> watch::Receiver<ClockSnapshot> {
        self.shared.publisher.subscribe()
    }

    /// Number of live receivers.
    pub fn subscriber_count(&self) -> usize {
        self.shared.publisher.receiver_count()
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("snapshot", &self.snapshot())
            .field("period", &self.period)
            .field("running", &self.is_running())
            .finish()
    }
}
