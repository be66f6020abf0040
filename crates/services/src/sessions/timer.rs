use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

/// Once-per-second publisher of the elapsed time of the running pass.
///
/// At most one ticker task runs at a time. Starting again replaces the running
/// task and stopping is idempotent. Outside a Tokio runtime the value is
/// published but never ticks.
#[derive(Debug)]
pub struct ElapsedTicker {
    elapsed: watch::Sender<u64>,
    task: Option<JoinHandle<()>>,
}

impl Default for ElapsedTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ElapsedTicker {
    #[must_use]
    pub fn new() -> Self {
        let (elapsed, _) = watch::channel(0);
        Self {
            elapsed,
            task: None,
        }
    }

    /// Start ticking from `initial_seconds`, stopping any previous ticker first.
    ///
    /// Returns `false` when no Tokio runtime is available to run the ticker.
    pub fn start(&mut self, initial_seconds: u64) -> bool {
        self.stop();
        self.elapsed.send_replace(initial_seconds);

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("no tokio runtime, elapsed ticker not started");
            return false;
        };

        let sender = self.elapsed.clone();
        let started = Instant::now();
        self.task = Some(runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(started + TICK, TICK);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let seconds = initial_seconds.saturating_add(started.elapsed().as_secs());
                sender.send_replace(seconds);
            }
        }));
        true
    }

    /// Stop ticking and keep the last published value.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Stop ticking and publish `seconds` as the final value.
    pub fn freeze_at(&mut self, seconds: u64) {
        self.stop();
        self.elapsed.send_replace(seconds);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        *self.elapsed.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed.subscribe()
    }
}

impl Drop for ElapsedTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
