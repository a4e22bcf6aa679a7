//! Periodic state owned by a background task and published over a
//! [`tokio::sync::watch`] channel.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// A background task that mutates `T` once per period.
///
/// Readers see the latest state through [`subscribe`](Self::subscribe) or
/// [`latest`](Self::latest). The task is aborted by [`stop`](Self::stop)
/// or when the ticker is dropped.
pub struct Ticker<T> {
    name: &'static str,
    rx: watch::Receiver<T>,
    handle: JoinHandle<()>,
}

impl<T: Clone + Send + Sync + 'static> Ticker<T> {
    /// Spawn the ticker. The first step runs one full `period` after start.
    pub fn spawn<F>(name: &'static str, initial: T, period: Duration, mut step: F) -> Self
    where
        F: FnMut(&mut T) + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let (tx, rx) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tx.send_modify(&mut step);
            }
        });

        debug!(ticker = name, period_ms = period.as_millis() as u64, "ticker started");
        Self { name, rx, handle }
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.rx.clone()
    }

    /// Snapshot of the current state.
    pub fn latest(&self) -> T {
        self.rx.borrow().clone()
    }
}

impl<T> Ticker<T> {
    /// Cancel the background task. The last published state stays readable.
    pub fn stop(&self) {
        if !self.handle.is_finished() {
            self.handle.abort();
            debug!(ticker = self.name, "ticker stopped");
        }
    }
}

impl<T> Drop for Ticker<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn steps_once_per_period() {
        let ticker = Ticker::spawn("count", 0u32, Duration::from_millis(100), |n| *n += 1);
        let mut rx = ticker.subscribe();
        assert_eq!(ticker.latest(), 0);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_freezes_state() {
        let ticker = Ticker::spawn("count", 0u32, Duration::from_millis(100), |n| *n += 1);
        let mut rx = ticker.subscribe();
        rx.changed().await.unwrap();
        ticker.stop();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(ticker.latest(), 1);
        // The sender is gone once the task is aborted.
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_task() {
        let ticker = Ticker::spawn("count", 0u32, Duration::from_millis(100), |n| *n += 1);
        let mut rx = ticker.subscribe();
        drop(ticker);
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), 0);
    }
}
