//! Cancellable fetch cycles
//!
//! A [`Poller`] owns one widget's state. Every call to [`Poller::start`]
//! begins a new generation: the previous in-flight fetch is aborted, and a
//! result is only published while its generation is still the latest one.
//! The generation check and the publish happen under the same lock, so a
//! late response can never overwrite a newer one.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::ClientError;
use crate::state::WidgetState;

struct Cycle {
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

struct Shared<T> {
    name: &'static str,
    tx: watch::Sender<WidgetState<T>>,
    cycle: Mutex<Cycle>,
}

impl<T> Shared<T> {
    fn publish(&self, generation: u64, state: WidgetState<T>) -> bool {
        let cycle = self.cycle.lock();
        if cycle.generation != generation {
            debug!(widget = self.name, generation, "Discarding superseded result");
            return false;
        }
        self.tx.send_replace(state);
        true
    }
}

/// Generation-guarded state holder for one widget
pub struct Poller<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Poller<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Send + Sync + 'static> std::fmt::Debug for Poller<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("name", &self.shared.name)
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}

impl<T: Send + Sync + 'static> Poller<T> {
    /// Create a poller in the `Loading` state
    pub fn new(name: &'static str) -> Self {
        let (tx, _rx) = watch::channel(WidgetState::Loading);
        Self {
            shared: Arc::new(Shared {
                name,
                tx,
                cycle: Mutex::new(Cycle {
                    generation: 0,
                    in_flight: None,
                }),
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<WidgetState<T>> {
        self.shared.tx.subscribe()
    }

    /// Latest generation started
    pub fn generation(&self) -> u64 {
        self.shared.cycle.lock().generation
    }

    /// Run `f` against the current state
    pub fn with_state<R>(&self, f: impl FnOnce(&WidgetState<T>) -> R) -> R {
        f(&self.shared.tx.borrow())
    }

    /// Begin a new fetch cycle, superseding any in-flight one
    ///
    /// Returns the new generation. Must be called within a tokio runtime.
    pub fn start<F>(&self, fetch: F) -> u64
    where
        F: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        let mut cycle = self.shared.cycle.lock();
        if let Some(previous) = cycle.in_flight.take() {
            previous.abort();
        }
        cycle.generation += 1;
        let generation = cycle.generation;

        let shared = Arc::clone(&self.shared);
        cycle.in_flight = Some(tokio::spawn(async move {
            let state = WidgetState::from(fetch.await);
            shared.publish(generation, state);
        }));

        debug!(widget = self.shared.name, generation, "Fetch started");
        generation
    }

    /// Modify a `Ready` value, unless a newer generation has started since
    /// `generation` was read
    ///
    /// Returns whether the update was applied.
    pub fn update_if_current(&self, generation: u64, f: impl FnOnce(&mut T)) -> bool {
        let cycle = self.shared.cycle.lock();
        if cycle.generation != generation {
            debug!(widget = self.shared.name, generation, "Discarding stale update");
            return false;
        }
        self.shared.tx.send_if_modified(|state| match state {
            WidgetState::Ready(value) => {
                f(value);
                true
            },
            _ => false,
        })
    }

    /// Abort the in-flight fetch, if any
    pub fn stop(&self) {
        if let Some(handle) = self.shared.cycle.lock().in_flight.take() {
            handle.abort();
        }
    }
}

/// Call `tick` immediately and then every `period` until cancelled
pub async fn run_every<F: FnMut()>(period: Duration, token: &CancellationToken, tick: F) {
    run_from(Instant::now(), period, token, tick).await;
}

/// Call `tick` every `period`, first after one full period, until cancelled
pub async fn run_after<F: FnMut()>(period: Duration, token: &CancellationToken, tick: F) {
    run_from(Instant::now() + period, period, token, tick).await;
}

async fn run_from<F: FnMut()>(
    start: Instant,
    period: Duration,
    token: &CancellationToken,
    mut tick: F,
) {
    let mut interval = time::interval_at(start, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = token.cancelled() => break,
            _ = interval.tick() => tick(),
        }
    }
}
